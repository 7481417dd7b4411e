//! Feedback data repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::feedback::{Feedback, SubmitFeedbackParam};

/// Repository providing database operations for camp feedback.
pub struct FeedbackRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackRepository<'a> {
    /// Creates a new FeedbackRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FeedbackRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new feedback record.
    ///
    /// # Arguments
    /// - `param` - Feedback parameters (camp, author email, rating, comment)
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The created feedback record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, param: SubmitFeedbackParam) -> Result<Feedback, DbErr> {
        let entity = entity::feedback::ActiveModel {
            camp_id: ActiveValue::Set(param.camp_id),
            participant_email: ActiveValue::Set(param.participant_email),
            rating: ActiveValue::Set(param.rating),
            comment: ActiveValue::Set(param.comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Feedback::from_entity(entity))
    }

    /// Gets all feedback, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Feedback>)` - All feedback records (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Feedback>, DbErr> {
        let entities = entity::prelude::Feedback::find()
            .order_by_desc(entity::feedback::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Feedback::from_entity).collect())
    }
}
