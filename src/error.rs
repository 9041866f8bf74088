//! Error types for phonelog-export
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for phonelog-export
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Authentication Errors
    // ============================================================================
    /// Signing the vendor JWT failed
    #[error("JWT generation failed: {message}")]
    JwtGeneration {
        /// What was wrong
        message: String,
    },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// Transport-level request failure, including undecodable JSON bodies
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the vendor
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code
        status: u16,
        /// Response body, if any
        body: String,
    },

    // ============================================================================
    // API Errors
    // ============================================================================
    /// A phone user had no matching organization directory entry
    #[error("User '{email}' not found in the organization directory")]
    UserNotFound {
        /// The phone user's email
        email: String,
    },

    /// A vendor record lacked a field the pipeline requires
    #[error("Missing field '{field}' in vendor record")]
    MissingField {
        /// The absent field name
        field: String,
    },

    // ============================================================================
    // Output Errors
    // ============================================================================
    /// A row or header failed to serialize
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a JWT generation error
    pub fn jwt(message: impl Into<String>) -> Self {
        Self::JwtGeneration {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a directory lookup miss error
    pub fn user_not_found(email: impl Into<String>) -> Self {
        Self::UserNotFound {
            email: email.into(),
        }
    }

    /// Create a missing-field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

/// Result type alias for phonelog-export
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::user_not_found("alice@example.com");
        assert_eq!(
            err.to_string(),
            "User 'alice@example.com' not found in the organization directory"
        );

        let err = Error::missing_field("direction");
        assert_eq!(err.to_string(), "Missing field 'direction' in vendor record");
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(_)));
    }
}
