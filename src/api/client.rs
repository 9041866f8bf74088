//! Vendor API client

use super::types::{CallLogPage, DateWindow, PhoneUserListResponse, UserListResponse, UserProfile};
use crate::auth::{Credentials, TokenProvider};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use std::sync::Arc;

/// Production API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.zoom.us/v2";

/// Call-log page size; the vendor caps pages at 300 records
pub const DEFAULT_PAGE_SIZE: u32 = 300;

/// Authenticated client for the vendor's phone API
pub struct PhoneApi {
    http: HttpClient,
}

impl PhoneApi {
    /// Create a client against the production API
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        let config = HttpClientConfig::builder().base_url(base_url).build();
        let provider = Arc::new(TokenProvider::new(credentials));
        Self {
            http: HttpClient::with_auth(config, provider),
        }
    }

    /// Fetch the full organization user directory
    pub async fn list_users(&self) -> Result<UserListResponse> {
        self.http.get_json("/users").await
    }

    /// Fetch the full phone user directory
    pub async fn list_phone_users(&self) -> Result<PhoneUserListResponse> {
        self.http.get_json("/phone/users").await
    }

    /// Fetch a single user profile by email
    pub async fn get_user(&self, email: &str) -> Result<UserProfile> {
        self.http.get_json(&format!("/users/{email}")).await
    }

    /// Fetch one page of call logs for a user within a date window
    ///
    /// Pass an empty `next_page_token` for the first page.
    pub async fn call_log_page(
        &self,
        email: &str,
        window: &DateWindow,
        page_size: u32,
        next_page_token: &str,
    ) -> Result<CallLogPage> {
        let mut config = RequestConfig::new()
            .query("page_size", page_size.to_string())
            .query("from", window.from_param())
            .query("to", window.to_param());

        if !next_page_token.is_empty() {
            config = config.query("next_page_token", next_page_token);
        }

        self.http
            .get_json_with_config(&format!("/phone/users/{email}/call_logs"), config)
            .await
    }
}

impl std::fmt::Debug for PhoneApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhoneApi").finish_non_exhaustive()
    }
}
