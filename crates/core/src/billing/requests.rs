//! API request types for billing mutations.
//!
//! These are the payloads accepted by create and update operations. An update
//! overwrites every mutable field of the existing entity (a full overwrite,
//! not a partial patch), so all fields that are required on the entity are
//! required here too.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{Client, Invoice};
use super::validation::{max_length, min_value, not_empty, positive, FieldError};

/// Request payload for creating or updating a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl ClientRequest {
    /// Create a request with just the required fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            company_name: None,
        }
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the company name.
    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    /// Checks every field rule, failing at the first violation.
    pub fn validate(&self) -> Result<(), FieldError> {
        not_empty(&self.name, "name")?;
        max_length(&self.name, 100, "name")?;

        not_empty(&self.email, "email")?;
        max_length(&self.email, 100, "email")?;

        if let Some(phone) = &self.phone {
            max_length(phone, 50, "phone")?;
        }
        if let Some(company_name) = &self.company_name {
            max_length(company_name, 255, "company_name")?;
        }

        Ok(())
    }

    /// Convert into a not-yet-persisted client.
    pub fn into_client(self) -> Client {
        Client {
            id: 0,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company_name: self.company_name,
        }
    }

    /// Overwrite the mutable fields of an existing client.
    pub fn apply_to(self, client: &mut Client) {
        client.name = self.name;
        client.email = self.email;
        client.phone = self.phone;
        client.company_name = self.company_name;
    }
}

/// Request payload for creating or updating an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRequest {
    pub client_id: i64,
    pub invoice_number: String,
    pub date_issued: NaiveDate,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl InvoiceRequest {
    /// Create a request with the required fields.
    pub fn new(
        client_id: i64,
        invoice_number: impl Into<String>,
        date_issued: NaiveDate,
        amount: f64,
    ) -> Self {
        Self {
            client_id,
            invoice_number: invoice_number.into(),
            date_issued,
            amount,
            notes: None,
        }
    }

    /// Set the free-form notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Checks every field rule, failing at the first violation.
    pub fn validate(&self) -> Result<(), FieldError> {
        positive(self.client_id, "client_id")?;

        not_empty(&self.invoice_number, "invoice_number")?;
        max_length(&self.invoice_number, 50, "invoice_number")?;

        min_value(self.amount, 0.01, "amount")?;

        Ok(())
    }

    /// Convert into a not-yet-persisted invoice.
    pub fn into_invoice(self) -> Invoice {
        Invoice {
            id: 0,
            client_id: self.client_id,
            invoice_number: self.invoice_number,
            date_issued: self.date_issued,
            amount: self.amount,
            notes: self.notes,
        }
    }

    /// Overwrite the mutable fields of an existing invoice.
    pub fn apply_to(self, invoice: &mut Invoice) {
        invoice.client_id = self.client_id;
        invoice.invoice_number = self.invoice_number;
        invoice.date_issued = self.date_issued;
        invoice.amount = self.amount;
        invoice.notes = self.notes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issued() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_valid_client_request() {
        let request = ClientRequest::new("Acme", "a@b.com")
            .with_phone("555-0100")
            .with_company_name("Acme Corp");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_client_request_rejects_empty_name() {
        let request = ClientRequest::new("", "a@b.com");
        let err = request.validate().unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_client_request_rejects_long_email() {
        let request = ClientRequest::new("Acme", "x".repeat(101));
        let err = request.validate().unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_client_request_fails_fast_on_first_violation() {
        // Both fields are invalid; only the first is reported.
        let request = ClientRequest::new("", "");
        let err = request.validate().unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_client_request_optional_fields_skip_checks_when_absent() {
        let request = ClientRequest::new("Acme", "a@b.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_into_client_leaves_id_unassigned() {
        let client = ClientRequest::new("Acme", "a@b.com").into_client();
        assert_eq!(client.id, 0);
        assert_eq!(client.name, "Acme");
    }

    #[test]
    fn test_apply_to_overwrites_all_mutable_fields() {
        let mut client = Client::new("Old", "old@b.com")
            .with_phone("000")
            .with_id(7);

        ClientRequest::new("New", "new@b.com").apply_to(&mut client);

        assert_eq!(client.id, 7);
        assert_eq!(client.name, "New");
        assert_eq!(client.email, "new@b.com");
        // Absent optional fields clear the previous value: full overwrite.
        assert_eq!(client.phone, None);
    }

    #[test]
    fn test_valid_invoice_request() {
        let request = InvoiceRequest::new(1, "INV-001", issued(), 125.5);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invoice_request_rejects_zero_client_id() {
        let request = InvoiceRequest::new(0, "INV-001", issued(), 125.5);
        let err = request.validate().unwrap_err();
        assert_eq!(err.field, "client_id");
    }

    #[test]
    fn test_invoice_request_rejects_amount_below_minimum() {
        let request = InvoiceRequest::new(1, "INV-001", issued(), 0.0);
        let err = request.validate().unwrap_err();
        assert_eq!(err.field, "amount");
    }

    #[test]
    fn test_invoice_request_rejects_long_invoice_number() {
        let request = InvoiceRequest::new(1, "N".repeat(51), issued(), 10.0);
        let err = request.validate().unwrap_err();
        assert_eq!(err.field, "invoice_number");
    }
}
