//! JWT minting and caching

use crate::error::{Error, Result};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Default lifetime in seconds for a minted token
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 30 * 60;

/// Leeway before expiry at which a cached token is considered stale
const EXPIRY_LEEWAY_SECONDS: i64 = 30;

/// API key/secret pair, used only to sign tokens. Never validated locally.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// API key, becomes the JWT `iss` claim
    pub api_key: String,
    /// API secret, the HS256 signing key
    pub api_secret: String,
}

impl Credentials {
    /// Create credentials from a key/secret pair
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

/// A minted token with its expiry instant
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The signed JWT
    pub token: String,
    /// When the token expires
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    /// Create a token expiring in `seconds` from now
    pub fn expires_in(token: impl Into<String>, seconds: i64) -> Self {
        Self {
            token: token.into(),
            expires_at: Utc::now() + Duration::seconds(seconds),
        }
    }

    /// Whether the token is expired or about to expire
    pub fn is_expired(&self) -> bool {
        Utc::now() + Duration::seconds(EXPIRY_LEEWAY_SECONDS) >= self.expires_at
    }
}

/// Claims for the vendor JWT
#[derive(Debug, Serialize)]
struct Claims {
    iss: String,
    iat: i64,
    exp: i64,
}

/// Mints bearer tokens on demand, re-signing when the cached one nears expiry
pub struct TokenProvider {
    credentials: Credentials,
    lifetime: Duration,
    cached: Arc<RwLock<Option<CachedToken>>>,
}

impl TokenProvider {
    /// Create a provider with the default token lifetime
    pub fn new(credentials: Credentials) -> Self {
        Self::with_lifetime(credentials, Duration::seconds(DEFAULT_TOKEN_LIFETIME_SECS))
    }

    /// Create a provider with a custom token lifetime
    pub fn with_lifetime(credentials: Credentials, lifetime: Duration) -> Self {
        Self {
            credentials,
            lifetime,
            cached: Arc::new(RwLock::new(None)),
        }
    }

    /// Get a valid bearer token, minting a fresh one if necessary
    pub async fn bearer_token(&self) -> Result<String> {
        {
            let cached = self.cached.read().await;
            if let Some(token) = cached.as_ref() {
                if !token.is_expired() {
                    return Ok(token.token.clone());
                }
            }
        }

        let mut cached = self.cached.write().await;

        // Double-check after acquiring write lock (another task might have minted)
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.token.clone());
            }
        }

        let new_token = self.mint()?;
        let token_str = new_token.token.clone();
        *cached = Some(new_token);

        Ok(token_str)
    }

    /// Sign a fresh HS256 JWT from the credentials
    fn mint(&self) -> Result<CachedToken> {
        let now = Utc::now();
        let expires_at = now + self.lifetime;

        let claims = Claims {
            iss: self.credentials.api_key.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let key = EncodingKey::from_secret(self.credentials.api_secret.as_bytes());
        let token = encode(&Header::default(), &claims, &key)
            .map_err(|e| Error::jwt(format!("Failed to encode JWT: {e}")))?;

        Ok(CachedToken { token, expires_at })
    }

    /// Clear the cached token (forces a re-sign on the next request)
    pub async fn clear_cache(&self) {
        let mut cached = self.cached.write().await;
        *cached = None;
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("api_key", &self.credentials.api_key)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}
