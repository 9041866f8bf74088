//! The export job

use super::types::{ExportOptions, ExportReport};
use crate::api::{CallLogPage, OrgUser, PhoneApi, PhoneUser};
use crate::error::{Error, Result};
use crate::output::CsvExportWriter;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

/// Delay before each user's requests. The vendor limits the call-log API to
/// about one request per second; the delay is unconditional, independent of
/// actual request latency.
pub const USER_REQUEST_DELAY: Duration = Duration::from_millis(1250);

/// One invocation's extraction pipeline
pub struct ExportJob {
    api: PhoneApi,
    options: ExportOptions,
}

impl ExportJob {
    /// Create a job over an API client
    pub fn new(api: PhoneApi, options: ExportOptions) -> Self {
        Self { api, options }
    }

    /// Run the export
    ///
    /// Directory fetches and export-file creation are fatal and propagate.
    /// Everything after that is per-user: a failed user is counted in the
    /// report and skipped, and rows already written for it are kept.
    pub async fn run(&self) -> Result<ExportReport> {
        let directory = self.api.list_users().await?;
        let phone_users = self.api.list_phone_users().await?;

        let mut writer = CsvExportWriter::create(&self.options.output_dir)?;
        let mut errors = 0;

        for user in &phone_users.users {
            tokio::time::sleep(self.options.user_delay).await;
            info!("Getting call logs for user {}", user.email);

            if let Err(e) = self.export_user(&directory.users, user, &mut writer).await {
                errors += 1;
                warn!("FAILED retrieving call logs for user {}: {e}", user.email);
            }
        }

        let rows_written = writer.rows_written();
        let output_path = writer.finish()?;

        Ok(ExportReport {
            users_processed: phone_users.users.len(),
            rows_written,
            errors,
            output_path,
        })
    }

    /// Run one user's pipeline: directory lookup, profile fetch, then the
    /// pagination loop. Any error aborts this user only.
    async fn export_user(
        &self,
        directory: &[OrgUser],
        user: &PhoneUser,
        writer: &mut CsvExportWriter,
    ) -> Result<()> {
        let org_user = directory
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(&user.email))
            .ok_or_else(|| Error::user_not_found(&user.email))?;
        let dept = org_user.dept.clone().unwrap_or_default();

        // Job title is not in the directory listing, so one profile call per user
        let profile = self.api.get_user(&user.email).await?;
        let job_title = profile.job_title.unwrap_or_default();

        let mut next_page_token = String::new();
        let mut first_run = true;

        while first_run || !next_page_token.is_empty() {
            let CallLogPage {
                total_records,
                next_page_token: token,
                call_logs,
            } = self
                .api
                .call_log_page(
                    &user.email,
                    &self.options.window,
                    self.options.page_size,
                    &next_page_token,
                )
                .await?;

            if total_records > 0 {
                let mut rows = Vec::with_capacity(call_logs.len());
                for mut record in call_logs {
                    if !self.options.direction.matches(&record)? {
                        continue;
                    }

                    // The matched directory entry wins over the phone user's
                    // email string; the two can differ in case
                    record.insert("email".into(), json!(org_user.email));
                    record.insert("dept".into(), json!(dept));
                    record.insert("job_title".into(), json!(job_title));
                    rows.push(record);
                }
                writer.write_records(&rows)?;
            }

            next_page_token = token;
            first_run = false;
        }

        Ok(())
    }
}

impl std::fmt::Debug for ExportJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportJob")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
