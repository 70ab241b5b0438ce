use async_trait::async_trait;

use crate::Result;

/// Downloads a linked resource into memory.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
