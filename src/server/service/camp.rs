//! Camp service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::camp::CampRepository,
    error::AppError,
    model::camp::{Camp, CountAction, CreateCampParam, UpdateCampParam},
};

/// Service providing business logic for camp management.
pub struct CampService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CampService<'a> {
    /// Creates a new CampService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CampService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all camps.
    ///
    /// # Returns
    /// - `Ok(Vec<Camp>)` - All camps ordered by date
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Camp>, AppError> {
        let camp_repo = CampRepository::new(self.db);
        let camps = camp_repo.get_all().await?;
        Ok(camps)
    }

    /// Retrieves a camp by id.
    ///
    /// # Arguments
    /// - `id` - Camp id to look up
    ///
    /// # Returns
    /// - `Ok(Some(Camp))` - Camp found
    /// - `Ok(None)` - No camp with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Camp>, AppError> {
        let camp_repo = CampRepository::new(self.db);
        let camp = camp_repo.find_by_id(id).await?;
        Ok(camp)
    }

    /// Creates a new camp.
    ///
    /// # Arguments
    /// - `param` - Camp creation parameters
    ///
    /// # Returns
    /// - `Ok(Camp)` - The created camp
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateCampParam) -> Result<Camp, AppError> {
        let camp_repo = CampRepository::new(self.db);
        let camp = camp_repo.insert(param).await?;
        Ok(camp)
    }

    /// Replaces a camp's editable fields.
    ///
    /// # Arguments
    /// - `id` - Id of the camp to update
    /// - `param` - New field values
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateCampParam) -> Result<u64, AppError> {
        let camp_repo = CampRepository::new(self.db);
        let rows = camp_repo.update(id, param).await?;
        Ok(rows)
    }

    /// Deletes a camp.
    ///
    /// # Arguments
    /// - `id` - Id of the camp to delete
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let camp_repo = CampRepository::new(self.db);
        let rows = camp_repo.delete(id).await?;
        Ok(rows)
    }

    /// Applies a participant-counter adjustment.
    ///
    /// # Arguments
    /// - `id` - Id of the camp to adjust
    /// - `action` - Parsed adjustment direction
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected (0 when no matching camp exists)
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn adjust_participants(
        &self,
        id: i32,
        action: CountAction,
    ) -> Result<u64, AppError> {
        let camp_repo = CampRepository::new(self.db);
        let rows = camp_repo.adjust_participants(id, action.delta()).await?;
        Ok(rows)
    }
}
