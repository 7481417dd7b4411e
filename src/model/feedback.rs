use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct FeedbackDto {
    pub id: i32,
    pub camp_id: i32,
    pub participant_email: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct SubmitFeedbackDto {
    pub camp_id: i32,
    pub participant_email: String,
    /// Rating from 1 to 5.
    pub rating: i32,
    pub comment: String,
}
