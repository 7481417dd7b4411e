//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles registration inserts, point lookups by email, profile updates, and
//! deletion with conversion between entity models and domain models at the
//! infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{RegisterUserParam, Role, UpdateProfileParam, User};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their email address.
    ///
    /// Single point read against the unique email column. This is the lookup the
    /// role authorizer performs on every admin-gated request.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with full data
    /// - `Ok(None)` - No user record with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Inserts a new user record.
    ///
    /// New users are stored with the standard participant role. Uniqueness of the
    /// email is the caller's concern; inserting a duplicate email surfaces as a
    /// database error.
    ///
    /// # Arguments
    /// - `param` - Registration parameters (email, name, optional contact fields)
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, param: RegisterUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            photo_url: ActiveValue::Set(param.photo_url),
            phone: ActiveValue::Set(param.phone),
            role: ActiveValue::Set(Role::Participant.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Gets all users ordered alphabetically by name.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All user records (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Updates a user's profile fields.
    ///
    /// Replaces name, photo URL, and phone for the user with the given id. The
    /// email and role columns are never touched by profile updates.
    ///
    /// # Arguments
    /// - `id` - Id of the user to update
    /// - `param` - New profile field values
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected (0 when no matching user exists)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(&self, id: i32, param: UpdateProfileParam) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::Name, Expr::value(param.name))
            .col_expr(entity::user::Column::PhotoUrl, Expr::value(param.photo_url))
            .col_expr(entity::user::Column::Phone, Expr::value(param.phone))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a user by id.
    ///
    /// # Arguments
    /// - `id` - Id of the user to delete
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when no matching user exists)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
