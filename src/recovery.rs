use crate::invoice::InvoiceRecord;
use std::collections::HashMap;
use tracing::debug;

/// Outstanding recoverable amounts per client.
///
/// Clients are kept in the order their first shortfall was seen. A client
/// only appears once it has at least one invoice with a shortfall, so every
/// total is strictly positive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecoveryTotals {
    totals: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl RecoveryTotals {
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// The recoverable total for `client`, if it has one.
    pub fn get(&self, client: &str) -> Option<f64> {
        self.index.get(client).map(|&i| self.totals[i].1)
    }

    /// Iterates over clients in the order their first shortfall was seen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.totals
            .iter()
            .map(|(client, total)| (client.as_str(), *total))
    }

    /// All totals ordered by client key, ascending.
    pub fn sorted_by_client(&self) -> Vec<(&str, f64)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        sorted
    }

    fn add(&mut self, client: &str, amount: f64) {
        match self.index.get(client) {
            Some(&i) => self.totals[i].1 += amount,
            None => {
                self.index.insert(client.to_string(), self.totals.len());
                self.totals.push((client.to_string(), amount));
            }
        }
    }
}

impl<'a> FromIterator<&'a InvoiceRecord> for RecoveryTotals {
    fn from_iter<I: IntoIterator<Item = &'a InvoiceRecord>>(iter: I) -> Self {
        let mut totals = RecoveryTotals::default();

        for invoice in iter {
            if let Some(shortfall) = invoice.shortfall() {
                debug!(
                    "Client {} - Invoice {}: Recovery ${:.2}",
                    invoice.client_key(),
                    invoice.invoice_id().unwrap_or("-"),
                    shortfall
                );
                totals.add(invoice.client_key(), shortfall);
            }
        }

        totals
    }
}

/// Totals the shortfall on every under-paid invoice by client.
pub fn analyze_recoveries(invoices: &[InvoiceRecord]) -> RecoveryTotals {
    invoices.iter().collect()
}
