//! Camp data repository for database operations.
//!
//! This module provides the `CampRepository` for managing camp records, including
//! the store-level atomic participant-counter adjustment that keeps concurrent
//! join and leave actions from losing updates.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::camp::{Camp, CreateCampParam, UpdateCampParam};

/// Repository providing database operations for camp management.
pub struct CampRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampRepository<'a> {
    /// Creates a new CampRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CampRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all camps ordered by date.
    ///
    /// # Returns
    /// - `Ok(Vec<Camp>)` - All camp records (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Camp>, DbErr> {
        let entities = entity::prelude::Camp::find()
            .order_by_asc(entity::camp::Column::DateTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Camp::from_entity).collect())
    }

    /// Finds a camp by id.
    ///
    /// # Arguments
    /// - `id` - Camp id to look up
    ///
    /// # Returns
    /// - `Ok(Some(Camp))` - Camp found
    /// - `Ok(None)` - No camp with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Camp>, DbErr> {
        let entity = entity::prelude::Camp::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Camp::from_entity))
    }

    /// Inserts a new camp with zero participants.
    ///
    /// # Arguments
    /// - `param` - Camp creation parameters
    ///
    /// # Returns
    /// - `Ok(Camp)` - The created camp
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, param: CreateCampParam) -> Result<Camp, DbErr> {
        let entity = entity::camp::ActiveModel {
            name: ActiveValue::Set(param.name),
            image: ActiveValue::Set(param.image),
            date_time: ActiveValue::Set(param.date_time),
            location: ActiveValue::Set(param.location),
            professional: ActiveValue::Set(param.professional),
            participants: ActiveValue::Set(0),
            fees: ActiveValue::Set(param.fees),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Camp::from_entity(entity))
    }

    /// Replaces a camp's editable fields.
    ///
    /// # Arguments
    /// - `id` - Id of the camp to update
    /// - `param` - New field values
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected (0 when no matching camp exists)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateCampParam) -> Result<u64, DbErr> {
        let result = entity::prelude::Camp::update_many()
            .filter(entity::camp::Column::Id.eq(id))
            .col_expr(entity::camp::Column::Name, Expr::value(param.name))
            .col_expr(entity::camp::Column::Image, Expr::value(param.image))
            .col_expr(entity::camp::Column::DateTime, Expr::value(param.date_time))
            .col_expr(entity::camp::Column::Location, Expr::value(param.location))
            .col_expr(
                entity::camp::Column::Professional,
                Expr::value(param.professional),
            )
            .col_expr(
                entity::camp::Column::Participants,
                Expr::value(param.participants),
            )
            .col_expr(entity::camp::Column::Fees, Expr::value(param.fees))
            .col_expr(
                entity::camp::Column::Description,
                Expr::value(param.description),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a camp by id.
    ///
    /// # Arguments
    /// - `id` - Id of the camp to delete
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when no matching camp exists)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Camp::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Applies a signed delta to a camp's participant counter.
    ///
    /// The adjustment is a single `participants = participants + delta` column
    /// expression so the store's own concurrency control serializes concurrent
    /// adjustments; the counter is never read-modify-written in process.
    ///
    /// # Arguments
    /// - `id` - Id of the camp to adjust
    /// - `delta` - Signed adjustment, `+1` or `-1`
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected (0 when no matching camp exists)
    /// - `Err(DbErr)` - Database error during update
    pub async fn adjust_participants(&self, id: i32, delta: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Camp::update_many()
            .filter(entity::camp::Column::Id.eq(id))
            .col_expr(
                entity::camp::Column::Participants,
                Expr::col(entity::camp::Column::Participants).add(delta),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
