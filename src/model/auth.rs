use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity payload presented at login.
///
/// The payload is signed as-is; the issuer does not check the claims
/// against stored users. Any extra fields the client sends are embedded
/// in the credential alongside the email.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TokenRequestDto {
    pub email: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub claims: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TokenDto {
    pub token: String,
}

/// Answer to "does this email belong to an admin?".
#[derive(Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct AdminStatusDto {
    pub admin: bool,
}
