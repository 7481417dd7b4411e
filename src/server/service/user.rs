//! User service for business logic.
//!
//! This module provides the `UserService` for managing user-related business logic:
//! registration with duplicate detection, admin-status resolution, profile updates,
//! and user administration.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{RegisterUserParam, UpdateProfileParam, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user unless the email is already taken.
    ///
    /// Performs a point read for the email first; an existing record short-circuits
    /// without an insert so repeated registrations are not an error.
    ///
    /// # Arguments
    /// - `param` - Registration parameters
    ///
    /// # Returns
    /// - `Ok(Some(User))` - New user was created
    /// - `Ok(None)` - A user with that email already exists; nothing was written
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn register(&self, param: RegisterUserParam) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Ok(None);
        }

        let user = user_repo.insert(param).await?;
        Ok(Some(user))
    }

    /// Retrieves all users.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users ordered by name
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let users = user_repo.get_all().await?;
        Ok(users)
    }

    /// Resolves whether the given email belongs to an admin.
    ///
    /// Absence of a user record and any role other than admin both resolve to
    /// `false`.
    ///
    /// # Arguments
    /// - `email` - Email to resolve
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether the stored role is admin
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn admin_status(&self, email: &str) -> Result<bool, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo.find_by_email(email).await?;

        Ok(user.map(|u| u.role.is_admin()).unwrap_or(false))
    }

    /// Updates a user's profile fields.
    ///
    /// # Arguments
    /// - `id` - Id of the user to update
    /// - `param` - New profile values
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        id: i32,
        param: UpdateProfileParam,
    ) -> Result<u64, AppError> {
        let user_repo = UserRepository::new(self.db);
        let rows = user_repo.update_profile(id, param).await?;
        Ok(rows)
    }

    /// Deletes a user.
    ///
    /// # Arguments
    /// - `id` - Id of the user to delete
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_user(&self, id: i32) -> Result<u64, AppError> {
        let user_repo = UserRepository::new(self.db);
        let rows = user_repo.delete(id).await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn register_param(email: &str) -> RegisterUserParam {
        RegisterUserParam {
            email: email.to_string(),
            name: "Alice".to_string(),
            photo_url: None,
            phone: None,
        }
    }

    /// Tests registering a brand-new user.
    ///
    /// Expected: Ok(Some(User)) and the record present afterwards
    #[tokio::test]
    async fn registers_new_user() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UserService::new(db);
        let created = service.register(register_param("a@x.com")).await?;

        assert!(created.is_some());
        assert_eq!(created.unwrap().email, "a@x.com");

        let users = service.get_all_users().await?;
        assert_eq!(users.len(), 1);

        Ok(())
    }

    /// Tests that re-registering an existing email writes nothing.
    ///
    /// The duplicate registration is reported, not treated as an error, and
    /// the stored record is untouched.
    ///
    /// Expected: Ok(None) and still exactly one record
    #[tokio::test]
    async fn reports_existing_user_without_inserting() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::user::UserFactory::new(db)
            .email("a@x.com")
            .name("Original")
            .build()
            .await?;

        let service = UserService::new(db);
        let created = service.register(register_param("a@x.com")).await?;

        assert!(created.is_none());

        let users = service.get_all_users().await?;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Original");

        Ok(())
    }

    /// Tests admin-status resolution across role values and absence.
    ///
    /// Expected: true only for a stored admin role
    #[tokio::test]
    async fn resolves_admin_status() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::user::create_admin(db, "admin@x.com").await?;
        factory::user::UserFactory::new(db)
            .email("user@x.com")
            .build()
            .await?;

        let service = UserService::new(db);

        assert!(service.admin_status("admin@x.com").await?);
        assert!(!service.admin_status("user@x.com").await?);
        assert!(!service.admin_status("ghost@x.com").await?);

        Ok(())
    }
}
