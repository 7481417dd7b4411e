use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RegistrationDto {
    pub id: i32,
    pub camp_id: i32,
    pub camp_name: String,
    pub participant_email: String,
    pub participant_name: String,
    pub fees: f64,
    pub payment_status: String,
    pub confirmation_status: String,
    pub transaction_id: Option<String>,
    pub feedback_eligible: bool,
}

/// Join request for a camp.
///
/// Camp name and fees are denormalized onto the join record so the
/// participant dashboard can render without a camp lookup.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct JoinCampDto {
    pub camp_id: i32,
    pub camp_name: String,
    pub participant_email: String,
    pub participant_name: String,
    pub fees: f64,
}
