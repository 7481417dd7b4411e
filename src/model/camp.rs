use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct CampDto {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub professional: String,
    pub participants: i32,
    pub fees: f64,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateCampDto {
    pub name: String,
    pub image: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    /// Lead healthcare professional attending the camp.
    pub professional: String,
    pub fees: f64,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateCampDto {
    pub name: String,
    pub image: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub professional: String,
    pub participants: i32,
    pub fees: f64,
    pub description: String,
}

/// Body of a participant-counter adjustment.
///
/// `action` must be `increment` or `decrement`; anything else is a 400.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ParticipantCountDto {
    pub action: String,
}
