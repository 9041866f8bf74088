//! CLI runner - executes the export

use crate::api::{DateWindow, PhoneApi};
use crate::auth::Credentials;
use crate::cli::commands::Cli;
use crate::error::Result;
use crate::export::{ExportJob, ExportOptions};
use chrono::Local;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the export job
    pub async fn run(&self) -> Result<()> {
        let from_date = self
            .cli
            .from_date
            .unwrap_or_else(|| Local::now().date_naive());
        let window = DateWindow::new(from_date, self.cli.number_of_days);

        info!(
            "Exporting call logs from {} to {} (direction: {})",
            window.from_param(),
            window.to_param(),
            self.cli.call_direction
        );

        let credentials = Credentials::new(&self.cli.api_key, &self.cli.api_secret);
        let api = PhoneApi::new(credentials);
        let options = ExportOptions::new(window)
            .with_direction(self.cli.call_direction)
            .with_output_dir(&self.cli.output_dir);

        let report = ExportJob::new(api, options).run().await?;

        info!(
            "Wrote {} rows for {} users to {}",
            report.rows_written,
            report.users_processed,
            report.output_path.display()
        );
        println!("Errors encountered: {}", report.errors);

        Ok(())
    }
}
