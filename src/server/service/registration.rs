//! Join-record service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::registration::RegistrationRepository,
    error::AppError,
    model::registration::{JoinCampParam, Registration},
};

/// Service providing business logic for camp registrations.
pub struct RegistrationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new RegistrationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RegistrationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a participant joining a camp.
    ///
    /// # Arguments
    /// - `param` - Join parameters
    ///
    /// # Returns
    /// - `Ok(Registration)` - The created join record
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn join(&self, param: JoinCampParam) -> Result<Registration, AppError> {
        let registration_repo = RegistrationRepository::new(self.db);
        let registration = registration_repo.insert(param).await?;
        Ok(registration)
    }

    /// Retrieves a join record by id.
    ///
    /// # Arguments
    /// - `id` - Join record id
    ///
    /// # Returns
    /// - `Ok(Some(Registration))` - Join record found
    /// - `Ok(None)` - No join record with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Registration>, AppError> {
        let registration_repo = RegistrationRepository::new(self.db);
        let registration = registration_repo.find_by_id(id).await?;
        Ok(registration)
    }

    /// Retrieves all join records belonging to one participant.
    ///
    /// # Arguments
    /// - `email` - Participant email
    ///
    /// # Returns
    /// - `Ok(Vec<Registration>)` - The participant's join records
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn for_participant(&self, email: &str) -> Result<Vec<Registration>, AppError> {
        let registration_repo = RegistrationRepository::new(self.db);
        let registrations = registration_repo.find_by_participant(email).await?;
        Ok(registrations)
    }

    /// Retrieves all join records.
    ///
    /// # Returns
    /// - `Ok(Vec<Registration>)` - All join records
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Registration>, AppError> {
        let registration_repo = RegistrationRepository::new(self.db);
        let registrations = registration_repo.get_all().await?;
        Ok(registrations)
    }

    /// Marks a join record as confirmed by the organizer.
    ///
    /// # Arguments
    /// - `id` - Id of the join record to confirm
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn confirm(&self, id: i32) -> Result<u64, AppError> {
        let registration_repo = RegistrationRepository::new(self.db);
        let rows = registration_repo.confirm(id).await?;
        Ok(rows)
    }

    /// Finalizes payment for a join record from a gateway success callback.
    ///
    /// # Arguments
    /// - `id` - Id of the join record the callback refers to
    /// - `transaction_id` - Gateway transaction identifier
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected (0 when no matching record exists)
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn finalize_payment(
        &self,
        id: i32,
        transaction_id: &str,
    ) -> Result<u64, AppError> {
        let registration_repo = RegistrationRepository::new(self.db);
        let rows = registration_repo.mark_paid(id, transaction_id).await?;
        Ok(rows)
    }

    /// Cancels a join record.
    ///
    /// # Arguments
    /// - `id` - Id of the join record to delete
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn cancel(&self, id: i32) -> Result<u64, AppError> {
        let registration_repo = RegistrationRepository::new(self.db);
        let rows = registration_repo.delete(id).await?;
        Ok(rows)
    }
}
