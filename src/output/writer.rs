//! CSV writer for call records

use crate::api::CallRecord;
use crate::error::Result;
use chrono::{DateTime, Local};
use serde_json::Value;
use std::fs::File;
use std::path::{Path, PathBuf};

/// The fixed output columns, in order. Vendor fields outside this set are
/// dropped at write time; absent fields are written as empty strings.
pub const CSV_HEADER: [&str; 13] = [
    "email",
    "dept",
    "job_title",
    "caller_number",
    "caller_number_type",
    "caller_name",
    "callee_number",
    "callee_number_type",
    "callee_name",
    "direction",
    "duration",
    "result",
    "date_time",
];

/// Export filename for a given job start instant
pub fn export_filename(at: DateTime<Local>) -> String {
    at.format("call-logs-%Y-%m-%d-%H-%M.csv").to_string()
}

/// Append-only CSV writer with the fixed call-log header
pub struct CsvExportWriter {
    writer: csv::Writer<File>,
    path: PathBuf,
    rows_written: usize,
}

impl CsvExportWriter {
    /// Create the export file in `dir`, named by the current local time,
    /// and write the header row
    pub fn create(dir: &Path) -> Result<Self> {
        Self::create_at(dir.join(export_filename(Local::now())))
    }

    /// Create the export file at an explicit path and write the header row
    pub fn create_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(CSV_HEADER)?;

        Ok(Self {
            writer,
            path,
            rows_written: 0,
        })
    }

    /// Append one call record, projecting it onto the fixed columns
    pub fn write_record(&mut self, record: &CallRecord) -> Result<()> {
        let row: Vec<String> = CSV_HEADER
            .iter()
            .map(|column| field_to_string(record.get(*column)))
            .collect();
        self.writer.write_record(&row)?;
        self.rows_written += 1;
        Ok(())
    }

    /// Append a batch of call records
    pub fn write_records(&mut self, records: &[CallRecord]) -> Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Path of the export file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Data rows written so far, excluding the header
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and close the file, returning its path
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush()?;
        Ok(self.path)
    }
}

impl std::fmt::Debug for CsvExportWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvExportWriter")
            .field("path", &self.path)
            .field("rows_written", &self.rows_written)
            .finish_non_exhaustive()
    }
}

/// Render a JSON field as a CSV cell
fn field_to_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}
