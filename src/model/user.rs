use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
    pub phone: Option<String>,
    pub role: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RegisterUserDto {
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
    pub phone: Option<String>,
}

/// Result of a registration attempt.
///
/// When a user with the same email already exists the request succeeds
/// with a message and no inserted id, mirroring the upsert-free insert
/// the registration flow relies on.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RegisterResultDto {
    pub message: Option<String>,
    pub inserted_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateProfileDto {
    pub name: String,
    pub photo_url: Option<String>,
    pub phone: Option<String>,
}
