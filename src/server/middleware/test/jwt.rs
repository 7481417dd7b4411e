use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header};
use serde_json::{json, Map};

use crate::server::{
    error::auth::AuthError,
    middleware::jwt::{Claims, JwtKeys, TOKEN_TTL_SECONDS},
};

/// Tests issuing then immediately verifying a credential.
///
/// Verifies that the claims embedded at issuance come back unchanged,
/// including arbitrary extra fields, and that the expiry lands six hours
/// out within a small tolerance.
///
/// Expected: Ok(Claims) matching the issued payload
#[test]
fn issue_then_verify_round_trips_claims() {
    let keys = JwtKeys::from_secret("test-secret");

    let mut extra = Map::new();
    extra.insert("name".to_string(), json!("Alice"));
    extra.insert("locale".to_string(), json!("en"));

    let token = keys
        .issue("a@x.com".to_string(), extra.clone())
        .expect("issuing cannot fail with a configured secret");

    let claims = keys.verify(&token).unwrap();

    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.extra, extra);

    let expected_exp = Utc::now().timestamp() + TOKEN_TTL_SECONDS;
    assert!((claims.exp - expected_exp).abs() <= 5);
}

/// Tests that a caller-supplied exp claim does not survive issuance.
///
/// The issuer stamps its own expiry; a payload trying to smuggle a distant
/// exp must not extend the credential's lifetime.
///
/// Expected: Ok(Claims) with the stamped six-hour expiry
#[test]
fn issuer_overrides_caller_supplied_expiry() {
    let keys = JwtKeys::from_secret("test-secret");

    let mut extra = Map::new();
    extra.insert("exp".to_string(), json!(i64::MAX));

    let token = keys.issue("a@x.com".to_string(), extra).unwrap();
    let claims = keys.verify(&token).unwrap();

    let expected_exp = Utc::now().timestamp() + TOKEN_TTL_SECONDS;
    assert!((claims.exp - expected_exp).abs() <= 5);
    assert!(!claims.extra.contains_key("exp"));
}

/// Tests that a token signed with a different secret is rejected.
///
/// Expected: Err(AuthError::InvalidCredential)
#[test]
fn rejects_token_signed_with_different_secret() {
    let keys = JwtKeys::from_secret("test-secret");
    let other_keys = JwtKeys::from_secret("another-secret");

    let token = other_keys
        .issue("a@x.com".to_string(), Map::new())
        .unwrap();

    let result = keys.verify(&token);

    assert!(matches!(result, Err(AuthError::InvalidCredential)));
}

/// Tests that a token whose embedded expiry is in the past is rejected.
///
/// The expired token is signed with the correct secret, so only the expiry
/// check can reject it.
///
/// Expected: Err(AuthError::InvalidCredential)
#[test]
fn rejects_expired_token() {
    let secret = "test-secret";
    let keys = JwtKeys::from_secret(secret);

    let claims = Claims {
        email: "a@x.com".to_string(),
        exp: Utc::now().timestamp() - 2 * TOKEN_TTL_SECONDS,
        extra: Map::new(),
    };
    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap();

    let result = keys.verify(&token);

    assert!(matches!(result, Err(AuthError::InvalidCredential)));
}

/// Tests that garbage that is not a token at all is rejected.
///
/// Expected: Err(AuthError::InvalidCredential)
#[test]
fn rejects_malformed_token() {
    let keys = JwtKeys::from_secret("test-secret");

    let result = keys.verify("not-a-jwt");

    assert!(matches!(result, Err(AuthError::InvalidCredential)));
}
