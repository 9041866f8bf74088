//! Export job
//!
//! Drives the end-to-end extraction for one invocation: enumerate phone
//! users, paginate each user's call logs over the date window, and append
//! the annotated rows to the CSV export file. Failures are per-user: a user
//! whose pipeline errors is counted and skipped, never fatal.

mod job;
mod types;


pub use job::{ExportJob, USER_REQUEST_DELAY};
pub use types::{CallDirection, ExportOptions, ExportReport};
