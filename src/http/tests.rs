//! Tests for the HTTP client module

use super::*;
use crate::auth::{Credentials, TokenProvider};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.default_headers.is_empty());
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://api.example.com".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("page_size", "300")
        .query("next_page_token", "tok")
        .header("X-Request-Id", "abc123");

    assert_eq!(config.query.get("page_size"), Some(&"300".to_string()));
    assert_eq!(config.query.get("next_page_token"), Some(&"tok".to_string()));
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
}

#[tokio::test]
async fn test_http_client_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [{"id": 1, "email": "alice@example.com"}]
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    let client = HttpClient::with_config(config);
    let data: serde_json::Value = client.get_json("/users").await.unwrap();

    assert_eq!(data["users"][0]["email"], "alice@example.com");
}

#[tokio::test]
async fn test_http_client_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/phone/users/alice@example.com/call_logs"))
        .and(query_param("page_size", "300"))
        .and(query_param("from", "2020-05-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "call_logs": []
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    let client = HttpClient::with_config(config);
    let response = client
        .get_with_config(
            "/phone/users/alice@example.com/call_logs",
            RequestConfig::new()
                .query("page_size", "300")
                .query("from", "2020-05-01"),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secure"))
        .and(header("X-Api-Version", "2"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("X-Api-Version", "2")
        .build();

    let client = HttpClient::with_config(config);
    let response = client.get("/secure").await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_bearer_auth_applied() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"users": []})))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    let provider = Arc::new(TokenProvider::new(Credentials::new("key", "secret")));
    let client = HttpClient::with_auth(config, provider);
    let response = client.get("/users").await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    let client = HttpClient::with_config(config);
    let result = client.get("/missing").await;

    assert!(matches!(
        result.unwrap_err(),
        crate::error::Error::HttpStatus { status: 404, .. }
    ));
}

#[tokio::test]
async fn test_http_client_no_retry_on_server_error() {
    let mock_server = MockServer::start().await;

    // A single 500 must surface immediately; exactly one request is made
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Server error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    let client = HttpClient::with_config(config);
    let result = client.get("/flaky").await;

    assert!(matches!(
        result.unwrap_err(),
        crate::error::Error::HttpStatus { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_http_client_full_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    // Client without base URL, full URL passed per request
    let client = HttpClient::new();
    let response = client
        .get(&format!("{}/test", mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("has_token_provider"));
}
