//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a camp together with one registration for a fresh participant.
///
/// Convenience for tests that need a realistic join-record setup without
/// caring about the individual fields.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, camp, registration))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_registration_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::camp::Model,
        entity::registration::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let camp = crate::factory::camp::create_camp(db).await?;
    let registration =
        crate::factory::registration::create_registration(db, camp.id, &user.email).await?;

    Ok((user, camp, registration))
}
