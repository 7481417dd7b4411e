//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for payment gateway requests
//! - Signing key pair for access credentials
//! - Payment gateway configuration

use sea_orm::DatabaseConnection;

use crate::server::middleware::jwt::JwtKeys;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `JwtKeys` clones the derived key material
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// HTTP client for making payment gateway requests.
    ///
    /// Configured with security settings (no redirects) to prevent SSRF
    /// vulnerabilities.
    pub http_client: reqwest::Client,

    /// Signing key pair for issuing and verifying access credentials.
    ///
    /// Derived once from the configured secret at startup; immutable for the
    /// lifetime of the process.
    pub jwt_keys: JwtKeys,

    /// Secret key authenticating requests to the payment gateway.
    pub stripe_secret_key: String,

    /// Payment-intent endpoint of the payment gateway.
    pub stripe_payment_intents_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for payment gateway requests
    /// - `jwt_keys` - Credential signing key pair
    /// - `stripe_secret_key` - Payment gateway secret key
    /// - `stripe_payment_intents_url` - Payment gateway endpoint
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        jwt_keys: JwtKeys,
        stripe_secret_key: String,
        stripe_payment_intents_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            jwt_keys,
            stripe_secret_key,
            stripe_payment_intents_url,
        }
    }
}
