//! Vendor response types
//!
//! Only the fields the export consumes are modeled. Call records stay opaque
//! JSON objects since the vendor's field set is wide and the CSV projection
//! picks the columns it needs at write time.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A call record as returned by the vendor, untyped
pub type CallRecord = Map<String, Value>;

/// One organization user from the user directory
#[derive(Debug, Clone, Deserialize)]
pub struct OrgUser {
    /// Email address, the match key against phone users
    pub email: String,
    /// Department; the vendor omits the field when unset
    #[serde(default)]
    pub dept: Option<String>,
}

/// Response shape of the organization user directory
#[derive(Debug, Clone, Deserialize)]
pub struct UserListResponse {
    /// All organization users
    #[serde(default)]
    pub users: Vec<OrgUser>,
}

/// One phone-enabled user
#[derive(Debug, Clone, Deserialize)]
pub struct PhoneUser {
    /// Email address
    pub email: String,
}

/// Response shape of the phone user directory
#[derive(Debug, Clone, Deserialize)]
pub struct PhoneUserListResponse {
    /// All phone-enabled users
    #[serde(default)]
    pub users: Vec<PhoneUser>,
}

/// A single user profile; only queried for the job title, which the
/// directory listing does not carry
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    /// Job title. The key must be present; a profile without it is
    /// malformed and fails that user. Null is a valid empty title.
    pub job_title: Option<String>,
}

/// One page of call logs
#[derive(Debug, Clone, Deserialize)]
pub struct CallLogPage {
    /// Total records matching the query, across all pages
    #[serde(default)]
    pub total_records: u64,
    /// Continuation token; empty means this is the last page
    #[serde(default)]
    pub next_page_token: String,
    /// The records on this page
    #[serde(default)]
    pub call_logs: Vec<CallRecord>,
}

impl CallLogPage {
    /// Whether the vendor signalled more pages
    pub fn has_more(&self) -> bool {
        !self.next_page_token.is_empty()
    }
}

/// Inclusive-start date range `[from, from + days)`
///
/// The vendor truncates queries beyond 30 days; that limit is not enforced
/// locally, matching the upstream contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    /// First day of the window
    pub from: NaiveDate,
    /// Day after the last day of the window
    pub to: NaiveDate,
}

impl DateWindow {
    /// Build a window starting at `from` and spanning `days` days
    pub fn new(from: NaiveDate, days: i64) -> Self {
        Self {
            from,
            to: from + chrono::Duration::days(days),
        }
    }

    /// Start of the window as a `YYYY-MM-DD` query value
    pub fn from_param(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    /// End of the window as a `YYYY-MM-DD` query value
    pub fn to_param(&self) -> String {
        self.to.format("%Y-%m-%d").to_string()
    }
}
