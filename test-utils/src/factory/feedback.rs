//! Feedback factory for creating test feedback entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a feedback record for the given camp and participant.
///
/// Feedback has no test-relevant variation beyond its keys, so a plain helper
/// replaces the builder pattern the other factories use.
///
/// # Arguments
/// - `db` - Database connection
/// - `camp_id` - Camp the feedback refers to
/// - `email` - Author email
///
/// # Returns
/// - `Ok(entity::feedback::Model)` - Created feedback entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_feedback(
    db: &DatabaseConnection,
    camp_id: i32,
    email: impl Into<String>,
) -> Result<entity::feedback::Model, DbErr> {
    let id = next_id();
    entity::feedback::ActiveModel {
        camp_id: ActiveValue::Set(camp_id),
        participant_email: ActiveValue::Set(email.into()),
        rating: ActiveValue::Set(5),
        comment: ActiveValue::Set(format!("Feedback {}", id)),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
