//! Feedback domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::feedback::{FeedbackDto, SubmitFeedbackDto};

/// Participant feedback for a camp.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: i32,
    pub camp_id: i32,
    pub participant_email: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    /// Converts the feedback domain model to a DTO for API responses.
    pub fn into_dto(self) -> FeedbackDto {
        FeedbackDto {
            id: self.id,
            camp_id: self.camp_id,
            participant_email: self.participant_email,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a feedback domain model at the repository boundary.
    pub fn from_entity(entity: entity::feedback::Model) -> Self {
        Self {
            id: entity.id,
            camp_id: entity.camp_id,
            participant_email: entity.participant_email,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for submitting feedback.
#[derive(Debug, Clone)]
pub struct SubmitFeedbackParam {
    pub camp_id: i32,
    pub participant_email: String,
    pub rating: i32,
    pub comment: String,
}

impl SubmitFeedbackParam {
    pub fn from_dto(dto: SubmitFeedbackDto) -> Self {
        Self {
            camp_id: dto.camp_id,
            participant_email: dto.participant_email,
            rating: dto.rating,
            comment: dto.comment,
        }
    }
}
