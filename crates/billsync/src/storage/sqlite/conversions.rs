//! Row-to-entity conversions and date formatting for the SQLite backend.

use chrono::NaiveDate;
use rusqlite::Row;

use billsync_core::billing::{Client, Invoice};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a date for TEXT column storage.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Converts a `clients` row to a [`Client`].
pub fn row_to_client(row: &Row<'_>) -> rusqlite::Result<Client> {
    Ok(Client {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        company_name: row.get(4)?,
    })
}

/// Converts an `invoices` row to an [`Invoice`].
pub fn row_to_invoice(row: &Row<'_>) -> rusqlite::Result<Invoice> {
    let date_str: String = row.get(3)?;
    let date_issued = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Invoice {
        id: row.get(0)?,
        client_id: row.get(1)?,
        invoice_number: row.get(2)?,
        date_issued,
        amount: row.get(4)?,
        notes: row.get(5)?,
    })
}
