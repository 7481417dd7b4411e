//! Feedback service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::feedback::FeedbackRepository,
    error::AppError,
    model::feedback::{Feedback, SubmitFeedbackParam},
};

/// Service providing business logic for camp feedback.
pub struct FeedbackService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> FeedbackService<'a> {
    /// Creates a new FeedbackService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FeedbackService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records feedback for a camp.
    ///
    /// # Arguments
    /// - `param` - Feedback parameters
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The created feedback record
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn submit(&self, param: SubmitFeedbackParam) -> Result<Feedback, AppError> {
        let feedback_repo = FeedbackRepository::new(self.db);
        let feedback = feedback_repo.insert(param).await?;
        Ok(feedback)
    }

    /// Retrieves all feedback.
    ///
    /// # Returns
    /// - `Ok(Vec<Feedback>)` - All feedback records, newest first
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Feedback>, AppError> {
        let feedback_repo = FeedbackRepository::new(self.db);
        let feedback = feedback_repo.get_all().await?;
        Ok(feedback)
    }
}
