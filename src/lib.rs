//! # phonelog-export
//!
//! Export Zoom Phone call logs to CSV.
//!
//! The tool authenticates against the vendor's REST API with a JWT minted
//! from an API key/secret pair, enumerates the organization's phone users,
//! pages through each user's call-detail records over a date window, and
//! appends the merged rows to a timestamped CSV file. Processing is fully
//! sequential; failures are counted per user and never abort the run.
//!
//! ```rust,ignore
//! use phonelog_export::api::{DateWindow, PhoneApi};
//! use phonelog_export::auth::Credentials;
//! use phonelog_export::export::{ExportJob, ExportOptions};
//!
//! #[tokio::main]
//! async fn main() -> phonelog_export::Result<()> {
//!     let api = PhoneApi::new(Credentials::new("API_KEY", "API_SECRET"));
//!     let window = DateWindow::new(chrono::Local::now().date_naive(), 1);
//!     let report = ExportJob::new(api, ExportOptions::new(window)).run().await?;
//!     println!("Errors encountered: {}", report.errors);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Vendor API authentication
pub mod auth;

/// HTTP client
pub mod http;

/// Vendor API surface
pub mod api;

/// CSV export file
pub mod output;

/// The export job
pub mod export;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
