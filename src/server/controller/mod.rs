//! HTTP request handlers.
//!
//! Each handler verifies the access gates its route requires via `AuthGuard`,
//! converts wire DTOs to operation parameters, delegates to a service, and
//! converts the result back into a response.

pub mod auth;
pub mod camp;
pub mod feedback;
pub mod payment;
pub mod registration;
pub mod user;
