//! Vendor API authentication
//!
//! Zoom's marketplace API authenticates with a short-lived HS256 JWT signed
//! with the account's API key/secret pair. This module mints that token and
//! caches it for the lifetime of the process, re-signing when it nears expiry.

mod token;

#[cfg(test)]
mod tests;

pub use token::{CachedToken, Credentials, TokenProvider, DEFAULT_TOKEN_LIFETIME_SECS};
