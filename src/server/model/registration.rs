//! Join-record domain models and parameters.
//!
//! A registration (join record) represents one participant's registration and
//! payment state for one camp. Camp name and fees are denormalized onto the
//! record at join time.

use chrono::{DateTime, Utc};

use crate::model::registration::{JoinCampDto, RegistrationDto};

/// Payment state of a join record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

impl PaymentStatus {
    pub fn from_db(value: &str) -> Self {
        match value {
            "paid" => Self::Paid,
            _ => Self::Unpaid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Paid => "paid",
        }
    }
}

/// Organizer confirmation state of a join record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationStatus {
    Pending,
    Confirmed,
}

impl ConfirmationStatus {
    pub fn from_db(value: &str) -> Self {
        match value {
            "confirmed" => Self::Confirmed,
            _ => Self::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
        }
    }
}

/// One participant's registration for one camp.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub id: i32,
    pub camp_id: i32,
    pub camp_name: String,
    pub participant_email: String,
    pub participant_name: String,
    pub fees: f64,
    pub payment_status: PaymentStatus,
    pub confirmation_status: ConfirmationStatus,
    /// Gateway transaction identifier, recorded on payment confirmation.
    pub transaction_id: Option<String>,
    /// Set once payment is confirmed; gates feedback submission client-side.
    pub feedback_eligible: bool,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    /// Converts the registration domain model to a DTO for API responses.
    pub fn into_dto(self) -> RegistrationDto {
        RegistrationDto {
            id: self.id,
            camp_id: self.camp_id,
            camp_name: self.camp_name,
            participant_email: self.participant_email,
            participant_name: self.participant_name,
            fees: self.fees,
            payment_status: self.payment_status.as_str().to_string(),
            confirmation_status: self.confirmation_status.as_str().to_string(),
            transaction_id: self.transaction_id,
            feedback_eligible: self.feedback_eligible,
        }
    }

    /// Converts an entity model to a registration domain model at the repository boundary.
    pub fn from_entity(entity: entity::registration::Model) -> Self {
        Self {
            id: entity.id,
            camp_id: entity.camp_id,
            camp_name: entity.camp_name,
            participant_email: entity.participant_email,
            participant_name: entity.participant_name,
            fees: entity.fees,
            payment_status: PaymentStatus::from_db(&entity.payment_status),
            confirmation_status: ConfirmationStatus::from_db(&entity.confirmation_status),
            transaction_id: entity.transaction_id,
            feedback_eligible: entity.feedback_eligible,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for joining a camp.
///
/// New join records start unpaid and pending confirmation.
#[derive(Debug, Clone)]
pub struct JoinCampParam {
    pub camp_id: i32,
    pub camp_name: String,
    pub participant_email: String,
    pub participant_name: String,
    pub fees: f64,
}

impl JoinCampParam {
    pub fn from_dto(dto: JoinCampDto) -> Self {
        Self {
            camp_id: dto.camp_id,
            camp_name: dto.camp_name,
            participant_email: dto.participant_email,
            participant_name: dto.participant_name,
            fees: dto.fees,
        }
    }
}
