//! Factory methods for creating test entities.
//!
//! Each factory inserts an entity with sensible defaults that individual tests
//! can override through a builder pattern, keeping test setup terse.

pub mod camp;
pub mod feedback;
pub mod helpers;
pub mod registration;
pub mod user;
