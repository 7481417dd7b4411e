//! Join-record data repository for database operations.
//!
//! This module provides the `RegistrationRepository` for managing join records,
//! covering participant-scoped listing, organizer confirmation, payment
//! finalization keyed by the gateway transaction, and cancellation.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::registration::{
    ConfirmationStatus, JoinCampParam, PaymentStatus, Registration,
};

/// Repository providing database operations for join records.
pub struct RegistrationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationRepository<'a> {
    /// Creates a new RegistrationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RegistrationRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new join record.
    ///
    /// New records start unpaid, pending confirmation, and ineligible for
    /// feedback.
    ///
    /// # Arguments
    /// - `param` - Join parameters with denormalized camp name and fees
    ///
    /// # Returns
    /// - `Ok(Registration)` - The created join record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, param: JoinCampParam) -> Result<Registration, DbErr> {
        let entity = entity::registration::ActiveModel {
            camp_id: ActiveValue::Set(param.camp_id),
            camp_name: ActiveValue::Set(param.camp_name),
            participant_email: ActiveValue::Set(param.participant_email),
            participant_name: ActiveValue::Set(param.participant_name),
            fees: ActiveValue::Set(param.fees),
            payment_status: ActiveValue::Set(PaymentStatus::Unpaid.as_str().to_string()),
            confirmation_status: ActiveValue::Set(
                ConfirmationStatus::Pending.as_str().to_string(),
            ),
            transaction_id: ActiveValue::Set(None),
            feedback_eligible: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Registration::from_entity(entity))
    }

    /// Finds a join record by id.
    ///
    /// # Arguments
    /// - `id` - Join record id to look up
    ///
    /// # Returns
    /// - `Ok(Some(Registration))` - Join record found
    /// - `Ok(None)` - No join record with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Registration>, DbErr> {
        let entity = entity::prelude::Registration::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Registration::from_entity))
    }

    /// Gets all join records belonging to one participant.
    ///
    /// # Arguments
    /// - `email` - Participant email the records belong to
    ///
    /// # Returns
    /// - `Ok(Vec<Registration>)` - The participant's join records, newest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_participant(&self, email: &str) -> Result<Vec<Registration>, DbErr> {
        let entities = entity::prelude::Registration::find()
            .filter(entity::registration::Column::ParticipantEmail.eq(email))
            .order_by_desc(entity::registration::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Registration::from_entity)
            .collect())
    }

    /// Gets all join records across all participants.
    ///
    /// # Returns
    /// - `Ok(Vec<Registration>)` - All join records, newest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Registration>, DbErr> {
        let entities = entity::prelude::Registration::find()
            .order_by_desc(entity::registration::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Registration::from_entity)
            .collect())
    }

    /// Marks a join record as confirmed by the organizer.
    ///
    /// # Arguments
    /// - `id` - Id of the join record to confirm
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected (0 when no matching record exists)
    /// - `Err(DbErr)` - Database error during update
    pub async fn confirm(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Registration::update_many()
            .filter(entity::registration::Column::Id.eq(id))
            .col_expr(
                entity::registration::Column::ConfirmationStatus,
                Expr::value(ConfirmationStatus::Confirmed.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Finalizes payment for a join record.
    ///
    /// Marks the record paid, stores the gateway transaction identifier, and
    /// makes the participant eligible to leave feedback, all in one update.
    ///
    /// # Arguments
    /// - `id` - Id of the join record the gateway callback refers to
    /// - `transaction_id` - Gateway transaction identifier
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected (0 when no matching record exists)
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_paid(&self, id: i32, transaction_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Registration::update_many()
            .filter(entity::registration::Column::Id.eq(id))
            .col_expr(
                entity::registration::Column::PaymentStatus,
                Expr::value(PaymentStatus::Paid.as_str()),
            )
            .col_expr(
                entity::registration::Column::TransactionId,
                Expr::value(Some(transaction_id.to_string())),
            )
            .col_expr(
                entity::registration::Column::FeedbackEligible,
                Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a join record by id.
    ///
    /// # Arguments
    /// - `id` - Id of the join record to delete
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when no matching record exists)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Registration::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
