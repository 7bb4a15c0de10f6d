use serde::{Deserialize, Deserializer};

/// Client key used for invoices that do not name a client.
pub const UNKNOWN_CLIENT: &str = "Unknown";

/// A single invoice row: what was billed to a client and how much of it has
/// been paid so far.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct InvoiceRecord {
    #[serde(default, deserialize_with = "non_blank")]
    client_id: Option<String>,

    #[serde(default, deserialize_with = "non_blank")]
    invoice_id: Option<String>,

    /// The amount the client was billed.
    invoiced_amount: f64,

    /// The amount the client has paid against this invoice.
    paid_amount: f64,
}

impl InvoiceRecord {
    pub fn new(
        client_id: Option<&str>,
        invoice_id: Option<&str>,
        invoiced_amount: f64,
        paid_amount: f64,
    ) -> Self {
        Self {
            client_id: client_id.and_then(normalize),
            invoice_id: invoice_id.and_then(normalize),
            invoiced_amount,
            paid_amount,
        }
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn invoice_id(&self) -> Option<&str> {
        self.invoice_id.as_deref()
    }

    /// The key this invoice is grouped under when totalling recoveries.
    pub fn client_key(&self) -> &str {
        self.client_id().unwrap_or(UNKNOWN_CLIENT)
    }

    /// The amount still owed on this invoice, if any.
    ///
    /// Fully paid and overpaid invoices have no shortfall. Comparisons
    /// involving NaN are false, so an invoice with a NaN amount never has a
    /// shortfall either.
    pub fn shortfall(&self) -> Option<f64> {
        if self.paid_amount < self.invoiced_amount {
            Some(self.invoiced_amount - self.paid_amount)
        } else {
            None
        }
    }
}

fn normalize(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(normalize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_shortfall_for_partially_paid_invoice() {
        let invoice = InvoiceRecord::new(Some("C1"), Some("I1"), 100.0, 60.0);
        assert_eq!(invoice.shortfall(), Some(40.0));
    }

    #[test]
    fn should_not_report_shortfall_for_paid_or_overpaid_invoice() {
        let paid = InvoiceRecord::new(Some("C1"), Some("I1"), 50.0, 50.0);
        let overpaid = InvoiceRecord::new(Some("C1"), Some("I2"), 50.0, 75.0);

        assert_eq!(paid.shortfall(), None);
        assert_eq!(overpaid.shortfall(), None);
    }

    #[test]
    fn should_not_report_shortfall_for_nan_amounts() {
        let invoice = InvoiceRecord::new(Some("C1"), Some("I1"), f64::NAN, 10.0);
        assert_eq!(invoice.shortfall(), None);
    }

    #[test]
    fn should_fall_back_to_unknown_client_key() {
        let missing = InvoiceRecord::new(None, Some("I1"), 10.0, 0.0);
        let blank = InvoiceRecord::new(Some("   "), Some("I2"), 10.0, 0.0);

        assert_eq!(missing.client_key(), UNKNOWN_CLIENT);
        assert_eq!(blank.client_id(), None);
        assert_eq!(blank.client_key(), UNKNOWN_CLIENT);
    }
}
