use async_trait::async_trait;
use std::path::PathBuf;
use sw_core::storage::ProcessedStore;
use sw_core::Result;

/// Processed-id set persisted as a JSON array of strings.
///
/// Every call re-reads the file, so two sequential runs of the process
/// always observe durable state. An absent or unparseable file reads as the
/// empty set; a failed write makes `try_add` report `false`. Neither is
/// surfaced to the caller.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn load(&self) -> Vec<String> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Processed set {} does not exist yet", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read processed set {}: {} (treating as empty)",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<String>>(&bytes) {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(
                    "Processed set {} is not valid JSON: {} (treating as empty)",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    async fn save(&self, ids: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let bytes = serde_json::to_vec_pretty(ids)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl ProcessedStore for JsonFileStore {
    async fn contains(&self, id: &str) -> bool {
        self.load().await.iter().any(|known| known == id)
    }

    async fn try_add(&self, id: &str) -> bool {
        let mut ids = self.load().await;
        if ids.iter().any(|known| known == id) {
            return false;
        }
        ids.push(id.to_string());
        match self.save(&ids).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    "Failed to record {} in processed set {}: {}",
                    id,
                    self.path.display(),
                    e
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("processed.json"))
    }

    #[tokio::test]
    async fn absent_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.contains("A1").await);
    }

    #[tokio::test]
    async fn try_add_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.try_add("A1").await);
        assert!(!store.try_add("A1").await);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let ids: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(ids, vec!["A1".to_string()]);
    }

    #[tokio::test]
    async fn insertion_order_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.try_add("A1").await);
        assert!(store.try_add("A2").await);
        assert!(store.try_add("A3").await);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let ids: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(ids, vec!["A1", "A2", "A3"]);
    }

    #[tokio::test]
    async fn malformed_file_reads_as_empty_and_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(!store.contains("A1").await);
        assert!(store.try_add("A1").await);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let ids: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(ids, vec!["A1".to_string()]);
    }

    #[tokio::test]
    async fn creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state/processed.json"));
        assert!(store.try_add("A1").await);
        assert!(store.contains("A1").await);
    }
}
