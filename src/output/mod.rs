//! CSV export file
//!
//! One file per invocation, named by the job start timestamp. The fixed
//! header is written at creation time, before any data row can exist.

mod writer;


pub use writer::{export_filename, CsvExportWriter, CSV_HEADER};
