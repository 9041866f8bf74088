//! HTTP client
//!
//! A thin JSON client over reqwest: base URL joining, default headers,
//! bearer authentication, and status classification. Requests are made
//! exactly once; a transient failure surfaces the same as a permanent one.

mod client;

#[cfg(test)]
mod tests;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
