//! Camp factory for creating test camp entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test camps with customizable fields.
///
/// Provides a builder pattern for creating camp entities with default values
/// that can be overridden as needed for specific test scenarios.
pub struct CampFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    participants: i32,
    fees: f64,
}

impl<'a> CampFactory<'a> {
    /// Creates a new CampFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Camp {id}"` where id is auto-incremented
    /// - participants: `0`
    /// - fees: `50.0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CampFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Camp {}", id),
            participants: 0,
            fees: 50.0,
        }
    }

    /// Sets the name for the camp.
    ///
    /// # Arguments
    /// - `name` - Display name for the camp
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the participant count for the camp.
    ///
    /// # Arguments
    /// - `participants` - Initial participant counter value
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn participants(mut self, participants: i32) -> Self {
        self.participants = participants;
        self
    }

    /// Sets the fees for the camp.
    ///
    /// # Arguments
    /// - `fees` - Camp fees
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn fees(mut self, fees: f64) -> Self {
        self.fees = fees;
        self
    }

    /// Builds and inserts the camp entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::camp::Model)` - Created camp entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::camp::Model, DbErr> {
        entity::camp::ActiveModel {
            name: ActiveValue::Set(self.name),
            image: ActiveValue::Set("https://example.com/camp.png".to_string()),
            date_time: ActiveValue::Set(Utc::now()),
            location: ActiveValue::Set("Test Town".to_string()),
            professional: ActiveValue::Set("Dr. Default".to_string()),
            participants: ActiveValue::Set(self.participants),
            fees: ActiveValue::Set(self.fees),
            description: ActiveValue::Set("A camp for testing".to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a camp with default values.
///
/// Shorthand for `CampFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::camp::Model)` - Created camp entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_camp(db: &DatabaseConnection) -> Result<entity::camp::Model, DbErr> {
    CampFactory::new(db).build().await
}
