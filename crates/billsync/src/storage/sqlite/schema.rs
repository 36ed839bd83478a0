//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository -
//! pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Clients table
CREATE TABLE IF NOT EXISTS clients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    company_name TEXT
);

-- Invoices table
CREATE TABLE IF NOT EXISTS invoices (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    client_id INTEGER NOT NULL,
    invoice_number TEXT NOT NULL,
    date_issued TEXT NOT NULL,
    amount REAL NOT NULL,
    notes TEXT,
    FOREIGN KEY (client_id) REFERENCES clients(id)
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_invoices_client_id ON invoices(client_id);
"#;

pub const SELECT_ALL_CLIENTS: &str =
    "SELECT id, name, email, phone, company_name FROM clients ORDER BY id";

pub const SELECT_CLIENT_BY_ID: &str =
    "SELECT id, name, email, phone, company_name FROM clients WHERE id = ?1";

pub const INSERT_CLIENT: &str =
    "INSERT INTO clients (name, email, phone, company_name) VALUES (?1, ?2, ?3, ?4)";

pub const UPDATE_CLIENT: &str =
    "UPDATE clients SET name = ?1, email = ?2, phone = ?3, company_name = ?4 WHERE id = ?5";

pub const DELETE_CLIENT: &str = "DELETE FROM clients WHERE id = ?1";

pub const EXISTS_CLIENT: &str = "SELECT EXISTS(SELECT 1 FROM clients WHERE id = ?1)";

pub const SELECT_ALL_INVOICES: &str =
    "SELECT id, client_id, invoice_number, date_issued, amount, notes FROM invoices ORDER BY id";

pub const SELECT_INVOICE_BY_ID: &str =
    "SELECT id, client_id, invoice_number, date_issued, amount, notes FROM invoices WHERE id = ?1";

pub const INSERT_INVOICE: &str = "INSERT INTO invoices (client_id, invoice_number, date_issued, amount, notes) VALUES (?1, ?2, ?3, ?4, ?5)";

pub const UPDATE_INVOICE: &str = "UPDATE invoices SET client_id = ?1, invoice_number = ?2, date_issued = ?3, amount = ?4, notes = ?5 WHERE id = ?6";

pub const DELETE_INVOICE: &str = "DELETE FROM invoices WHERE id = ?1";

pub const EXISTS_INVOICE: &str = "SELECT EXISTS(SELECT 1 FROM invoices WHERE id = ?1)";
