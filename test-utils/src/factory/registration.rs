//! Registration factory for creating test join records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test join records with customizable fields.
pub struct RegistrationFactory<'a> {
    db: &'a DatabaseConnection,
    camp_id: i32,
    camp_name: String,
    participant_email: String,
    participant_name: String,
    fees: f64,
    payment_status: String,
    feedback_eligible: bool,
}

impl<'a> RegistrationFactory<'a> {
    /// Creates a new RegistrationFactory with default values.
    ///
    /// Defaults:
    /// - camp_id: `1`
    /// - camp_name: `"Camp {id}"` where id is auto-incremented
    /// - participant_email: `"participant{id}@example.com"`
    /// - participant_name: `"Participant {id}"`
    /// - fees: `50.0`
    /// - payment_status: `"unpaid"`
    /// - feedback_eligible: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RegistrationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            camp_id: 1,
            camp_name: format!("Camp {}", id),
            participant_email: format!("participant{}@example.com", id),
            participant_name: format!("Participant {}", id),
            fees: 50.0,
            payment_status: "unpaid".to_string(),
            feedback_eligible: false,
        }
    }

    /// Sets the camp id the record belongs to.
    ///
    /// # Arguments
    /// - `camp_id` - Camp id
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn camp_id(mut self, camp_id: i32) -> Self {
        self.camp_id = camp_id;
        self
    }

    /// Sets the participant email on the record.
    ///
    /// # Arguments
    /// - `email` - Participant email
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn participant_email(mut self, email: impl Into<String>) -> Self {
        self.participant_email = email.into();
        self
    }

    /// Sets the payment status on the record.
    ///
    /// # Arguments
    /// - `status` - `"unpaid"` or `"paid"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn payment_status(mut self, status: impl Into<String>) -> Self {
        self.payment_status = status.into();
        self
    }

    /// Sets feedback eligibility on the record.
    ///
    /// # Arguments
    /// - `eligible` - Whether feedback may be left
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn feedback_eligible(mut self, eligible: bool) -> Self {
        self.feedback_eligible = eligible;
        self
    }

    /// Builds and inserts the join record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::registration::Model)` - Created join record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::registration::Model, DbErr> {
        entity::registration::ActiveModel {
            camp_id: ActiveValue::Set(self.camp_id),
            camp_name: ActiveValue::Set(self.camp_name),
            participant_email: ActiveValue::Set(self.participant_email),
            participant_name: ActiveValue::Set(self.participant_name),
            fees: ActiveValue::Set(self.fees),
            payment_status: ActiveValue::Set(self.payment_status),
            confirmation_status: ActiveValue::Set("pending".to_string()),
            transaction_id: ActiveValue::Set(None),
            feedback_eligible: ActiveValue::Set(self.feedback_eligible),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a join record for the given camp and participant.
///
/// Shorthand for
/// `RegistrationFactory::new(db).camp_id(camp_id).participant_email(email).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `camp_id` - Camp the record belongs to
/// - `email` - Participant email
///
/// # Returns
/// - `Ok(entity::registration::Model)` - Created join record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_registration(
    db: &DatabaseConnection,
    camp_id: i32,
    email: impl Into<String>,
) -> Result<entity::registration::Model, DbErr> {
    RegistrationFactory::new(db)
        .camp_id(camp_id)
        .participant_email(email)
        .build()
        .await
}
