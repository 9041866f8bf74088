//! Vendor API surface
//!
//! Typed access to the four operations the export consumes: list organization
//! users, list phone users, get a single user profile, and fetch one page of
//! call logs for a user and date window.

mod client;
mod types;


pub use client::{PhoneApi, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use types::{
    CallLogPage, CallRecord, DateWindow, OrgUser, PhoneUser, PhoneUserListResponse, UserProfile,
    UserListResponse,
};
