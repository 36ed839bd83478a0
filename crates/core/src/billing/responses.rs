//! External representations exposed across the service boundary.
//!
//! These are what the cache stores and what callers receive, never the raw
//! persisted entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{Client, Invoice};

/// External representation of a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
}

impl From<&Client> for ClientSummary {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id,
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            company_name: client.company_name.clone(),
        }
    }
}

/// External representation of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub id: i64,
    pub client_id: i64,
    pub invoice_number: String,
    pub date_issued: NaiveDate,
    pub amount: f64,
    pub notes: Option<String>,
}

impl From<&Invoice> for InvoiceSummary {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            client_id: invoice.client_id,
            invoice_number: invoice.invoice_number.clone(),
            date_issued: invoice.date_issued,
            amount: invoice.amount,
            notes: invoice.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_summary_projection() {
        let client = Client::new("Acme", "a@b.com")
            .with_company_name("Acme Corp")
            .with_id(3);

        let summary = ClientSummary::from(&client);

        assert_eq!(summary.id, 3);
        assert_eq!(summary.name, "Acme");
        assert_eq!(summary.company_name.as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn test_invoice_summary_projection() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let invoice = Invoice::new(1, "INV-001", date, 125.5)
            .with_notes("net 30")
            .with_id(9);

        let summary = InvoiceSummary::from(&invoice);

        assert_eq!(summary.id, 9);
        assert_eq!(summary.client_id, 1);
        assert_eq!(summary.date_issued, date);
        assert_eq!(summary.notes.as_deref(), Some("net 30"));
    }
}
