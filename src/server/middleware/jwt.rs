use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::server::error::auth::AuthError;

/// Access credentials live for six hours from issuance.
pub const TOKEN_TTL_SECONDS: i64 = 6 * 60 * 60;

/// Claims embedded in every credential issued by the server.
///
/// The email identifies the user for ownership and role checks. Whatever
/// extra claims the login payload carried ride along unchanged; issuance
/// trusts the caller and does not check them against storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    /// Expiry as a Unix timestamp in seconds.
    pub exp: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// HS256 signing key pair derived once from the configured secret.
///
/// Loaded at startup and shared immutably through `AppState`; issuing and
/// verifying are pure in-memory operations with no store access.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a credential embedding the supplied identity payload.
    pub fn issue(&self, email: String, mut extra: Map<String, Value>) -> Result<String, AuthError> {
        // The stamped expiry wins over any caller-supplied exp claim.
        extra.remove("exp");

        let claims = Claims {
            email,
            exp: Utc::now().timestamp() + TOKEN_TTL_SECONDS,
            extra,
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(AuthError::TokenCreation)
    }

    /// Verifies signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidCredential)
    }
}
