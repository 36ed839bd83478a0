//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use billsync_core::billing::{Client, Invoice};
use billsync_core::storage::{Repository, Result};

/// In-memory storage backend for testing.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access and
/// atomic counters for identity assignment. Data is not persisted and will
/// be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    clients: Arc<RwLock<HashMap<i64, Client>>>,
    invoices: Arc<RwLock<HashMap<i64, Invoice>>>,
    next_client_id: Arc<AtomicI64>,
    next_invoice_id: Arc<AtomicI64>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Client> for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Client>> {
        let clients = self.clients.read().await;
        let mut all: Vec<Client> = clients.values().cloned().collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Client>> {
        let clients = self.clients.read().await;
        Ok(clients.get(&id).cloned())
    }

    async fn save(&self, mut entity: Client) -> Result<Client> {
        if entity.id == 0 {
            entity.id = self.next_client_id.fetch_add(1, Ordering::SeqCst) + 1;
        }
        self.clients.write().await.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.clients.write().await.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.clients.read().await.contains_key(&id))
    }
}

#[async_trait]
impl Repository<Invoice> for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Invoice>> {
        let invoices = self.invoices.read().await;
        let mut all: Vec<Invoice> = invoices.values().cloned().collect();
        all.sort_by_key(|i| i.id);
        Ok(all)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Invoice>> {
        let invoices = self.invoices.read().await;
        Ok(invoices.get(&id).cloned())
    }

    async fn save(&self, mut entity: Invoice) -> Result<Invoice> {
        if entity.id == 0 {
            entity.id = self.next_invoice_id.fetch_add(1, Ordering::SeqCst) + 1;
        }
        self.invoices
            .write()
            .await
            .insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.invoices.write().await.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.invoices.read().await.contains_key(&id))
    }
}
