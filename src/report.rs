use crate::recovery::RecoveryTotals;
use num_format::Locale;
use std::fmt;
use std::str::FromStr;
use tracing::info;

pub const TITLE: &str = "Invoice Recovery Report";
pub const TITLE_RULE: &str = "========================";
pub const NO_RECOVERIES: &str = "No recoveries needed. All invoices are fully paid.";

/// Number of lines before the first client line.
const HEADER_LINES: usize = 3;

/// The order client lines appear in a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportOrder {
    /// Clients appear in the order their first shortfall was seen.
    #[default]
    FirstSeen,

    /// Clients are sorted by client key, ascending.
    ClientKey,
}

impl FromStr for ReportOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-seen" => Ok(ReportOrder::FirstSeen),
            "client" => Ok(ReportOrder::ClientKey),
            other => Err(format!("unknown report order: {}", other)),
        }
    }
}

/// A rendered recovery report, one entry per output line.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The per-client lines, without the title block.
    pub fn client_lines(&self) -> &[String] {
        &self.lines[HEADER_LINES..]
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Renders a client-ready summary of the recoverable amounts in `totals`.
pub fn generate_report(totals: &RecoveryTotals, order: ReportOrder) -> Report {
    let mut lines = vec![TITLE.to_string(), TITLE_RULE.to_string(), String::new()];

    if totals.is_empty() {
        lines.push(NO_RECOVERIES.to_string());
    } else {
        let entries: Vec<(&str, f64)> = match order {
            ReportOrder::FirstSeen => totals.iter().collect(),
            ReportOrder::ClientKey => totals.sorted_by_client(),
        };
        lines.extend(entries.into_iter().map(|(client, total)| {
            format!(
                "Client {}: Recoverable Amount: ${}",
                client,
                format_amount(total)
            )
        }));
    }

    info!("Report generated successfully");
    Report { lines }
}

/// Formats `amount` with `,` thousands separators and two decimal places,
/// e.g. `1234567.891` becomes `1,234,567.89`.
///
/// Cents are rounded from the exact binary value with ties to even, so
/// `0.125` becomes `0.12`.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!("{}{}.{}", sign, group_thousands(whole), cents)
}

fn group_thousands(digits: &str) -> String {
    let separator = Locale::en.separator();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }

    grouped
}
