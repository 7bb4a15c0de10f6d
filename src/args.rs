use crate::report::ReportOrder;
use clap::{App, Arg};
use std::ffi::OsString;
use std::path::PathBuf;

/// Invoice data read when no path is given.
pub const DEFAULT_CSV_FILE: &str = "invoices.csv";

/// Log file appended to when no path is given.
pub const DEFAULT_LOG_FILE: &str = "invoice_recovery_analyzer.log";

#[derive(Clone, Debug, PartialEq)]
pub struct Args {
    pub csv_file: PathBuf,
    pub log_file: PathBuf,
    pub order: ReportOrder,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            csv_file: PathBuf::from(DEFAULT_CSV_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            order: ReportOrder::default(),
        }
    }
}

impl Args {
    pub fn parse() -> Self {
        Self::parse_from(std::env::args_os())
    }

    pub fn parse_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = App::new("invoice_recovery")
            .version("0.1.0")
            .about("Summarises the outstanding recoverable amount per client")
            .arg(
                Arg::with_name("csv_file")
                    .takes_value(true)
                    .default_value(DEFAULT_CSV_FILE)
                    .help("path of invoice CSV file to read from"),
            )
            .arg(
                Arg::with_name("log_file")
                    .long("log-file")
                    .takes_value(true)
                    .default_value(DEFAULT_LOG_FILE)
                    .help("path of the log file to append diagnostics to"),
            )
            .arg(
                Arg::with_name("order")
                    .long("order")
                    .takes_value(true)
                    .possible_values(&["first-seen", "client"])
                    .default_value("first-seen")
                    .help("order of client lines in the report"),
            )
            .get_matches_from(args);

        Self {
            csv_file: matches
                .value_of_os("csv_file")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_FILE)),
            log_file: matches
                .value_of_os("log_file")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            order: matches
                .value_of("order")
                .and_then(|order| order.parse().ok())
                .unwrap_or_default(),
        }
    }
}
