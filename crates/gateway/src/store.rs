//! In-memory registry of the content items the gateway can edit.

use quire_core::{Editable, ItemStatus};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Content that can be shared across request handlers.
pub trait Content: Editable + Send + Sync {}

impl<T: Editable + Send + Sync> Content for T {}

/// One registered content item.
#[derive(Clone)]
pub struct ContentEntry {
    pub content: Arc<dyn Content>,
    pub status: ItemStatus,
}

/// Content items keyed by (type name, id).
#[derive(Default)]
pub struct ContentStore {
    entries: RwLock<HashMap<(String, i64), ContentEntry>>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item. Replaces any existing item with the same key.
    pub async fn insert(
        &self,
        content_type: impl Into<String>,
        id: i64,
        content: Arc<dyn Content>,
        status: ItemStatus,
    ) {
        self.entries
            .write()
            .await
            .insert((content_type.into(), id), ContentEntry { content, status });
    }

    pub async fn get(&self, content_type: &str, id: i64) -> Option<ContentEntry> {
        self.entries
            .read()
            .await
            .get(&(content_type.to_string(), id))
            .cloned()
    }

    /// Update an item's status. Returns `false` if the item is unknown.
    pub async fn set_status(&self, content_type: &str, id: i64, status: ItemStatus) -> bool {
        match self
            .entries
            .write()
            .await
            .get_mut(&(content_type.to_string(), id))
        {
            Some(entry) => {
                entry.status = status;
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
