pub mod args;
pub mod errors;
pub mod invoice;
pub mod loader;
pub mod logging;
pub mod recovery;
pub mod report;

use crate::args::Args;
use crate::loader::load_invoices;
use crate::recovery::analyze_recoveries;
use crate::report::{generate_report, Report};

/// Shown instead of a report when no invoice records could be loaded.
pub const NO_DATA_NOTICE: &str = "No invoice data available. Please check the CSV file.";

/// What a run produced.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// No invoice records were loaded, so nothing was analysed.
    NoData,

    /// The rendered recovery report.
    Report(Report),
}

/// Loads the configured invoice file, totals the recoverable amounts and
/// renders the report.
pub fn run(args: &Args) -> Outcome {
    let invoices = load_invoices(&args.csv_file);
    if invoices.is_empty() {
        return Outcome::NoData;
    }

    let totals = analyze_recoveries(&invoices);
    Outcome::Report(generate_report(&totals, args.order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportOrder, NO_RECOVERIES};
    use std::fs;
    use tempfile::TempDir;

    fn args_for(dir: &TempDir, contents: &str) -> Args {
        let csv_file = dir.path().join("invoices.csv");
        fs::write(&csv_file, contents).unwrap();
        Args {
            csv_file,
            log_file: dir.path().join("recovery.log"),
            order: ReportOrder::FirstSeen,
        }
    }

    #[test]
    fn should_report_recoverable_amounts() {
        let dir = TempDir::new().unwrap();
        let args = args_for(
            &dir,
            "client_id,invoice_id,invoiced_amount,paid_amount\n\
             C1,I1,100.00,60.00\n\
             C1,I2,50.00,50.00\n\
             C2,I3,200.00,bad\n",
        );

        let report = match run(&args) {
            Outcome::Report(report) => report,
            Outcome::NoData => panic!("expected a report"),
        };
        assert_eq!(
            report.client_lines(),
            &["Client C1: Recoverable Amount: $40.00"]
        );
        assert!(!report.to_string().contains("C2"));
    }

    #[test]
    fn should_short_circuit_on_header_only_file() {
        let dir = TempDir::new().unwrap();
        let args = args_for(&dir, "client_id,invoice_id,invoiced_amount,paid_amount\n");

        assert_eq!(run(&args), Outcome::NoData);
    }

    #[test]
    fn should_short_circuit_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let args = Args {
            csv_file: dir.path().join("missing.csv"),
            ..Args::default()
        };

        assert_eq!(run(&args), Outcome::NoData);
    }

    #[test]
    fn should_report_no_recoveries_when_everything_is_paid() {
        let dir = TempDir::new().unwrap();
        let args = args_for(
            &dir,
            "client_id,invoice_id,invoiced_amount,paid_amount\n\
             C1,I1,10,10\n\
             C2,I2,20.5,20.5\n",
        );

        match run(&args) {
            Outcome::Report(report) => assert_eq!(report.client_lines(), &[NO_RECOVERIES]),
            Outcome::NoData => panic!("expected a report"),
        }
    }
}
