use async_trait::async_trait;
use std::sync::Arc;
use sw_core::storage::ProcessedStore;
use tokio::sync::RwLock;

/// In-memory processed-id set, for tests and dry runs. Same append-only
/// semantics as the file backend, nothing durable.
#[derive(Clone, Default)]
pub struct MemoryStore {
    ids: Arc<RwLock<Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn ids(&self) -> Vec<String> {
        self.ids.read().await.clone()
    }
}

#[async_trait]
impl ProcessedStore for MemoryStore {
    async fn contains(&self, id: &str) -> bool {
        self.ids.read().await.iter().any(|known| known == id)
    }

    async fn try_add(&self, id: &str) -> bool {
        let mut ids = self.ids.write().await;
        if ids.iter().any(|known| known == id) {
            return false;
        }
        ids.push(id.to_string());
        true
    }
}
