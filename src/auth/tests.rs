//! Tests for the auth module

use super::*;
use chrono::Duration;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DecodedClaims {
    iss: String,
    exp: i64,
}

#[tokio::test]
async fn test_bearer_token_is_valid_jwt() {
    let provider = TokenProvider::new(Credentials::new("key-123", "secret-456"));
    let token = provider.bearer_token().await.unwrap();

    assert_eq!(token.split('.').count(), 3);

    let decoded = decode::<DecodedClaims>(
        &token,
        &DecodingKey::from_secret(b"secret-456"),
        &Validation::default(),
    )
    .unwrap();

    assert_eq!(decoded.claims.iss, "key-123");
    assert!(decoded.claims.exp > chrono::Utc::now().timestamp());
}

#[tokio::test]
async fn test_token_is_cached_across_calls() {
    let provider = TokenProvider::new(Credentials::new("key", "secret"));
    let first = provider.bearer_token().await.unwrap();
    let second = provider.bearer_token().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_cache_clear_forces_new_mint() {
    // A long lifetime so only the explicit clear can invalidate the token
    let provider =
        TokenProvider::with_lifetime(Credentials::new("key", "secret"), Duration::hours(1));
    let first = provider.bearer_token().await.unwrap();

    // iat has one-second granularity; wait so the re-mint produces new claims
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    provider.clear_cache().await;
    let second = provider.bearer_token().await.unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_cached_token_expiry() {
    let fresh = CachedToken::expires_in("tok", 3600);
    assert!(!fresh.is_expired());

    let stale = CachedToken::expires_in("tok", 5);
    assert!(stale.is_expired());

    let past = CachedToken::expires_in("tok", -10);
    assert!(past.is_expired());
}

#[tokio::test]
async fn test_expired_cached_token_is_replaced() {
    // Zero lifetime: every cached token is immediately stale
    let provider =
        TokenProvider::with_lifetime(Credentials::new("key", "secret"), Duration::seconds(0));
    let first = provider.bearer_token().await.unwrap();
    let second = provider.bearer_token().await.unwrap();

    // Both mints succeed even though nothing can be served from cache
    assert_eq!(first.split('.').count(), 3);
    assert_eq!(second.split('.').count(), 3);
}
