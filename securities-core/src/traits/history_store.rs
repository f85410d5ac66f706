//! Recent-history store abstract Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::types::HistoryEntry;

/// Recent-items store
///
/// Provides a default memory implementation of `InMemoryHistoryStore`.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Record an entry; an entry with the same item and value is replaced
    async fn put(&self, entry: HistoryEntry) -> CoreResult<()>;

    /// Most recent entries of `item`, newest first
    async fn recent(&self, item: &str, limit: usize) -> CoreResult<Vec<HistoryEntry>>;
}

/// In-memory history store, capped per item
#[derive(Clone)]
pub struct InMemoryHistoryStore {
    entries: Arc<RwLock<Vec<HistoryEntry>>>,
    capacity: usize,
}

impl InMemoryHistoryStore {
    pub const DEFAULT_CAPACITY: usize = 20;

    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            capacity: capacity.max(1),
        }
    }
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn put(&self, entry: HistoryEntry) -> CoreResult<()> {
        let mut entries = self.entries.write().await;
        entries.retain(|e| !(e.item == entry.item && e.value == entry.value));
        entries.insert(0, entry);

        let capacity = self.capacity;
        let mut seen: HashMap<String, usize> = HashMap::new();
        entries.retain(|e| {
            let count = seen.entry(e.item.clone()).or_insert(0);
            *count += 1;
            *count <= capacity
        });
        Ok(())
    }

    async fn recent(&self, item: &str, limit: usize) -> CoreResult<Vec<HistoryEntry>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| e.item == item)
            .take(limit)
            .cloned()
            .collect())
    }
}
