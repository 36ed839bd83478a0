//! SQLite repository implementation.
//!
//! Implements the [`Repository`] trait from `billsync_core::storage` for both
//! entity kinds over one async connection.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use billsync_core::billing::{Client, Invoice};
use billsync_core::storage::{Repository, RepositoryError, Result};

use super::conversions::{format_date, row_to_client, row_to_invoice};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for both entity kinds.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema and enable foreign key enforcement.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch("PRAGMA foreign_keys = ON;")
                .map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

// ============================================================================
// Repository<Client> implementation
// ============================================================================

#[async_trait]
impl Repository<Client> for SqliteRepository {
    async fn find_all(&self) -> Result<Vec<Client>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_CLIENTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_client).map_err(wrap_err)?;

                let mut clients = Vec::new();
                for row_result in rows {
                    clients.push(row_result.map_err(wrap_err)?);
                }
                Ok(clients)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Client>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CLIENT_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_client) {
                    Ok(client) => Ok(Some(client)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn save(&self, entity: Client) -> Result<Client> {
        self.conn
            .call(move |conn| {
                if entity.id == 0 {
                    conn.execute(
                        schema::INSERT_CLIENT,
                        rusqlite::params![
                            entity.name,
                            entity.email,
                            entity.phone,
                            entity.company_name
                        ],
                    )
                    .map_err(wrap_err)?;
                    let id = conn.last_insert_rowid();
                    Ok(Client { id, ..entity })
                } else {
                    conn.execute(
                        schema::UPDATE_CLIENT,
                        rusqlite::params![
                            entity.name,
                            entity.email,
                            entity.phone,
                            entity.company_name,
                            entity.id
                        ],
                    )
                    .map_err(wrap_err)?;
                    Ok(entity)
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_CLIENT, [id]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        self.conn
            .call(move |conn| {
                let exists: bool = conn
                    .query_row(schema::EXISTS_CLIENT, [id], |row| row.get(0))
                    .map_err(wrap_err)?;
                Ok(exists)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

// ============================================================================
// Repository<Invoice> implementation
// ============================================================================

#[async_trait]
impl Repository<Invoice> for SqliteRepository {
    async fn find_all(&self) -> Result<Vec<Invoice>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_INVOICES)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_invoice).map_err(wrap_err)?;

                let mut invoices = Vec::new();
                for row_result in rows {
                    invoices.push(row_result.map_err(wrap_err)?);
                }
                Ok(invoices)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Invoice>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_INVOICE_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_invoice) {
                    Ok(invoice) => Ok(Some(invoice)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn save(&self, entity: Invoice) -> Result<Invoice> {
        self.conn
            .call(move |conn| {
                let date_issued = format_date(&entity.date_issued);
                if entity.id == 0 {
                    conn.execute(
                        schema::INSERT_INVOICE,
                        rusqlite::params![
                            entity.client_id,
                            entity.invoice_number,
                            date_issued,
                            entity.amount,
                            entity.notes
                        ],
                    )
                    .map_err(wrap_err)?;
                    let id = conn.last_insert_rowid();
                    Ok(Invoice { id, ..entity })
                } else {
                    conn.execute(
                        schema::UPDATE_INVOICE,
                        rusqlite::params![
                            entity.client_id,
                            entity.invoice_number,
                            date_issued,
                            entity.amount,
                            entity.notes,
                            entity.id
                        ],
                    )
                    .map_err(wrap_err)?;
                    Ok(entity)
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_INVOICE, [id])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        self.conn
            .call(move |conn| {
                let exists: bool = conn
                    .query_row(schema::EXISTS_INVOICE, [id], |row| row.get(0))
                    .map_err(wrap_err)?;
                Ok(exists)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
