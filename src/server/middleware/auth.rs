use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::jwt::{Claims, JwtKeys},
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    keys: &'a JwtKeys,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a JwtKeys) -> Self {
        Self { db, keys }
    }

    /// Stateless credential check: header present, signature valid, unexpired.
    ///
    /// Never touches the store; the decoded claims are returned to the caller
    /// instead of being stashed on the request.
    pub fn verify(&self, headers: &HeaderMap) -> Result<Claims, AppError> {
        let Some(value) = headers.get(header::AUTHORIZATION) else {
            return Err(AuthError::MissingCredential.into());
        };

        let value = value.to_str().map_err(|_| AuthError::InvalidCredential)?;
        let token = value
            .split_whitespace()
            .nth(1)
            .ok_or(AuthError::InvalidCredential)?;

        Ok(self.keys.verify(token)?)
    }

    pub async fn require(
        &self,
        headers: &HeaderMap,
        permissions: &[Permission],
    ) -> Result<Claims, AppError> {
        let claims = self.verify(headers)?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !self.is_admin(&claims.email).await? {
                        return Err(AuthError::AccessDenied(claims.email.clone()).into());
                    }
                }
            }
        }

        Ok(claims)
    }

    /// Point read of the stored role; re-queried on every call.
    pub async fn is_admin(&self, email: &str) -> Result<bool, AppError> {
        let user = UserRepository::new(self.db).find_by_email(email).await?;

        Ok(user.map(|u| u.role.is_admin()).unwrap_or(false))
    }

    /// User-scoped routes may only touch the caller's own records,
    /// independent of role.
    pub fn require_owner(&self, claims: &Claims, email: &str) -> Result<(), AppError> {
        if claims.email != email {
            return Err(AuthError::OwnershipMismatch {
                actual: claims.email.clone(),
                requested: email.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
