//! CLI arguments

use crate::export::CallDirection;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Export Zoom Phone call logs for every phone user to a timestamped CSV file
#[derive(Parser, Debug)]
#[command(name = "phonelog-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key for the account
    pub api_key: String,

    /// API secret for the account
    pub api_secret: String,

    /// Starting date for the call-log query (e.g. 2019-12-31); defaults to today
    #[arg(long = "from_date", value_name = "YYYY-MM-DD")]
    pub from_date: Option<NaiveDate>,

    /// Number of days to pull call logs; the vendor caps one query at 30 days
    #[arg(long = "number_of_days", default_value_t = 1)]
    pub number_of_days: i64,

    /// 'all', 'inbound', or 'outbound'; any other value behaves as 'all'
    #[arg(long = "call_direction", default_value = "all")]
    pub call_direction: CallDirection,

    /// Directory to create the export file in
    #[arg(long = "output_dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
