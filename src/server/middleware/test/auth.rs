use axum::http::{header, HeaderMap};
use serde_json::Map;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        jwt::JwtKeys,
    },
};

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );
    headers
}

/// Tests that a request without an authorization header is rejected.
///
/// Expected: Err(AuthError::MissingCredential)
#[tokio::test]
async fn rejects_request_without_authorization_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::from_secret("test-secret");

    let auth_guard = AuthGuard::new(db, &keys);
    let result = auth_guard.verify(&HeaderMap::new());

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingCredential))
    ));

    Ok(())
}

/// Tests that a header with only a scheme and no token is rejected.
///
/// Expected: Err(AuthError::InvalidCredential)
#[tokio::test]
async fn rejects_header_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::from_secret("test-secret");

    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, "Bearer".parse().unwrap());

    let auth_guard = AuthGuard::new(db, &keys);
    let result = auth_guard.verify(&headers);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredential))
    ));

    Ok(())
}

/// Tests that a valid bearer token yields the decoded claims.
///
/// The decoded identity is returned to the caller rather than stashed on
/// the request, so the handler sees exactly what was verified.
///
/// Expected: Ok(Claims) with the issued email
#[tokio::test]
async fn returns_claims_for_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::from_secret("test-secret");

    let token = keys.issue("a@x.com".to_string(), Map::new())?;

    let auth_guard = AuthGuard::new(db, &keys);
    let claims = auth_guard.verify(&bearer_headers(&token))?;

    assert_eq!(claims.email, "a@x.com");

    Ok(())
}

/// Tests that a token signed with a different secret is rejected at the gate.
///
/// Expected: Err(AuthError::InvalidCredential)
#[tokio::test]
async fn rejects_token_from_other_secret() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::from_secret("test-secret");
    let other_keys = JwtKeys::from_secret("another-secret");

    let token = other_keys.issue("a@x.com".to_string(), Map::new())?;

    let auth_guard = AuthGuard::new(db, &keys);
    let result = auth_guard.verify(&bearer_headers(&token));

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredential))
    ));

    Ok(())
}

/// Tests admin user successfully passes the admin permission check.
///
/// Verifies that the AuthGuard grants access when the credential verifies
/// and its email resolves to a stored user with the admin role.
///
/// Expected: Ok(Claims) for the admin's email
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::from_secret("test-secret");

    factory::user::create_admin(db, "admin@example.com").await?;

    let token = keys.issue("admin@example.com".to_string(), Map::new())?;

    let auth_guard = AuthGuard::new(db, &keys);
    let claims = auth_guard
        .require(&bearer_headers(&token), &[Permission::Admin])
        .await?;

    assert_eq!(claims.email, "admin@example.com");

    Ok(())
}

/// Tests non-admin user is denied by the admin permission check.
///
/// Verifies that the AuthGuard denies access when the credential verifies
/// but the stored role is not admin.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::from_secret("test-secret");

    factory::user::UserFactory::new(db)
        .email("user@example.com")
        .role("participant")
        .build()
        .await?;

    let token = keys.issue("user@example.com".to_string(), Map::new())?;

    let auth_guard = AuthGuard::new(db, &keys);
    let result = auth_guard
        .require(&bearer_headers(&token), &[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(email))) => {
            assert_eq!(email, "user@example.com");
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.map(|_| ())),
    }

    Ok(())
}

/// Tests that an email with no user record is denied admin access.
///
/// A verifiable credential naming an unknown email must not pass the role
/// gate; absence of a record means a standard user.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_when_no_user_record_exists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::from_secret("test-secret");

    let token = keys.issue("ghost@example.com".to_string(), Map::new())?;

    let auth_guard = AuthGuard::new(db, &keys);
    let result = auth_guard
        .require(&bearer_headers(&token), &[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}

/// Tests the ownership check passes for the caller's own email.
///
/// Expected: Ok(())
#[tokio::test]
async fn require_owner_accepts_own_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::from_secret("test-secret");

    let token = keys.issue("a@x.com".to_string(), Map::new())?;

    let auth_guard = AuthGuard::new(db, &keys);
    let claims = auth_guard.verify(&bearer_headers(&token))?;

    assert!(auth_guard.require_owner(&claims, "a@x.com").is_ok());

    Ok(())
}

/// Tests the ownership check rejects another user's email even for admins.
///
/// User-scoped routes compare emails independent of role; an admin
/// credential gives no cross-user access.
///
/// Expected: Err(AuthError::OwnershipMismatch)
#[tokio::test]
async fn require_owner_rejects_other_email_regardless_of_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::from_secret("test-secret");

    factory::user::create_admin(db, "admin@example.com").await?;

    let token = keys.issue("admin@example.com".to_string(), Map::new())?;

    let auth_guard = AuthGuard::new(db, &keys);
    let claims = auth_guard
        .require(&bearer_headers(&token), &[Permission::Admin])
        .await?;

    let result = auth_guard.require_owner(&claims, "someone-else@example.com");

    match result {
        Err(AppError::AuthErr(AuthError::OwnershipMismatch { actual, requested })) => {
            assert_eq!(actual, "admin@example.com");
            assert_eq!(requested, "someone-else@example.com");
        }
        other => panic!(
            "Expected OwnershipMismatch error, got: {:?}",
            other.map(|_| ())
        ),
    }

    Ok(())
}
