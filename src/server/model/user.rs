//! User domain models and parameters.
//!
//! Provides the domain model for application users keyed by email, the stored
//! role attribute that gates elevated operations, and parameter types for
//! registration and profile updates.

use chrono::{DateTime, Utc};

use crate::model::user::{RegisterUserDto, UpdateProfileDto, UserDto};

/// Stored role attribute gating elevated operations.
///
/// Only the literal value `admin` grants elevated privilege; absence or any
/// other stored value means a standard participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Participant,
}

impl Role {
    pub fn from_db(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            _ => Self::Participant,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Participant => "participant",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Application user with contact details and role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Email identifying the user; unique across the user table.
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
    pub phone: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            photo_url: self.photo_url,
            phone: self.phone,
            role: self.role.as_str().to_string(),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            photo_url: entity.photo_url,
            phone: entity.phone,
            role: Role::from_db(&entity.role),
            created_at: entity.created_at,
        }
    }
}

/// Parameters for registering a new user.
///
/// New users always start as standard participants; the role column is only
/// ever elevated out-of-band.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
    pub phone: Option<String>,
}

impl RegisterUserParam {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            email: dto.email,
            name: dto.name,
            photo_url: dto.photo_url,
            phone: dto.phone,
        }
    }
}

/// Parameters for updating a user's profile fields.
#[derive(Debug, Clone)]
pub struct UpdateProfileParam {
    pub name: String,
    pub photo_url: Option<String>,
    pub phone: Option<String>,
}

impl UpdateProfileParam {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            name: dto.name,
            photo_url: dto.photo_url,
            phone: dto.phone,
        }
    }
}
