use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No credential was presented on a protected route.
    ///
    /// The request carried no authorization header at all. Results in a
    /// 401 Unauthorized response.
    #[error("No credential presented in the authorization header")]
    MissingCredential,

    /// The presented credential failed verification.
    ///
    /// Covers a malformed bearer value, a signature that does not match the
    /// configured secret, and an expired token. Results in a 401 Unauthorized
    /// response.
    #[error("Credential failed signature or expiry verification")]
    InvalidCredential,

    /// A verified identity lacks the admin role required by the route.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} does not have the admin role")]
    AccessDenied(String),

    /// A verified identity requested another user's data.
    ///
    /// User-scoped routes require the path email to equal the credential's
    /// embedded email, independent of role. Results in a 403 Forbidden response.
    #[error("Authenticated as {actual} but requested data for {requested}")]
    OwnershipMismatch {
        /// Email embedded in the verified credential.
        actual: String,
        /// Email the request tried to read.
        requested: String,
    },

    /// Signing a new credential failed.
    ///
    /// Cannot happen with a valid configured secret; surfaced as a
    /// 500 Internal Server Error.
    #[error("Failed to sign access credential")]
    TokenCreation(#[source] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to the response codes the API contract fixes:
/// - `MissingCredential` / `InvalidCredential` → 401 with "unauthorized access"
/// - `AccessDenied` / `OwnershipMismatch` → 403 with "forbidden access"
/// - `TokenCreation` → 500 with a generic message
///
/// Denials are logged at debug level while the client-facing messages stay
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingCredential | Self::InvalidCredential => {
                tracing::debug!("Rejected credential: {}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        message: "unauthorized access".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(_) | Self::OwnershipMismatch { .. } => {
                tracing::debug!("Denied access: {}", self);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        message: "forbidden access".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::TokenCreation(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto {
                    message: "Internal server error".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
