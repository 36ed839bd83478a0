use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A client that invoices are issued to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Surrogate key assigned by the store; `0` means not yet persisted.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
}

impl Client {
    /// Creates a not-yet-persisted client with the given name and email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
            phone: None,
            company_name: None,
        }
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the company name.
    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    /// Sets a specific ID (useful for testing).
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

/// An invoice issued to a client. Many invoices reference one client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Surrogate key assigned by the store; `0` means not yet persisted.
    pub id: i64,
    pub client_id: i64,
    pub invoice_number: String,
    pub date_issued: NaiveDate,
    pub amount: f64,
    pub notes: Option<String>,
}

impl Invoice {
    /// Creates a not-yet-persisted invoice for the given client.
    pub fn new(
        client_id: i64,
        invoice_number: impl Into<String>,
        date_issued: NaiveDate,
        amount: f64,
    ) -> Self {
        Self {
            id: 0,
            client_id,
            invoice_number: invoice_number.into(),
            date_issued,
            amount,
            notes: None,
        }
    }

    /// Sets the free-form notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets a specific ID (useful for testing).
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}
