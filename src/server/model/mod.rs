//! Domain models and operation parameter types.
//!
//! Domain models carry validated, typed data between the data layer and the
//! controllers; parameter types describe the inputs of individual operations.
//! Conversion to and from entity models happens at the repository boundary,
//! conversion to DTOs at the controller boundary.

pub mod camp;
pub mod feedback;
pub mod registration;
pub mod user;
