//! Export job types

use crate::api::{CallRecord, DateWindow, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Which call directions to keep in the output
///
/// Parsing is lenient on purpose: any value other than `inbound` or
/// `outbound` behaves as [`CallDirection::All`], with no error raised. This
/// mirrors the upstream contract rather than inferring stricter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallDirection {
    /// Keep every record
    #[default]
    All,
    /// Keep only inbound calls
    Inbound,
    /// Keep only outbound calls
    Outbound,
}

impl CallDirection {
    /// Whether a call record passes this filter
    ///
    /// Under a directional filter the record must carry a `direction` field;
    /// its absence is an error that fails the user, not a silent drop. A
    /// present non-matching value simply filters the record out.
    pub fn matches(&self, record: &CallRecord) -> Result<bool> {
        let wanted = match self {
            Self::All => return Ok(true),
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        };
        let direction = record
            .get("direction")
            .ok_or_else(|| Error::missing_field("direction"))?;
        Ok(direction.as_str() == Some(wanted))
    }
}

impl std::str::FromStr for CallDirection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "inbound" => Self::Inbound,
            "outbound" => Self::Outbound,
            _ => Self::All,
        })
    }
}

impl std::fmt::Display for CallDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        };
        f.write_str(s)
    }
}

/// Configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Date range to query
    pub window: DateWindow,
    /// Post-fetch direction filter
    pub direction: CallDirection,
    /// Records per call-log page
    pub page_size: u32,
    /// Directory the export file is created in
    pub output_dir: PathBuf,
    /// Unconditional delay before each user, for the vendor's fixed
    /// rate limit of about one request per second
    pub user_delay: Duration,
}

impl ExportOptions {
    /// Create options for a date window with the default filter, page size,
    /// output directory, and rate-limit delay
    pub fn new(window: DateWindow) -> Self {
        Self {
            window,
            direction: CallDirection::All,
            page_size: DEFAULT_PAGE_SIZE,
            output_dir: PathBuf::from("."),
            user_delay: super::USER_REQUEST_DELAY,
        }
    }

    /// Set the direction filter
    #[must_use]
    pub fn with_direction(mut self, direction: CallDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the per-user delay
    #[must_use]
    pub fn with_user_delay(mut self, delay: Duration) -> Self {
        self.user_delay = delay;
        self
    }
}

/// Outcome of one export run
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Phone users visited, successful or not
    pub users_processed: usize,
    /// Data rows written to the export file
    pub rows_written: usize,
    /// Users whose pipeline failed at any stage
    pub errors: usize,
    /// Path of the export file
    pub output_path: PathBuf,
}
