use async_trait::async_trait;
use std::time::Duration;

use crate::Result;

/// The DOM query/act surface the pipeline drives. Implementations wrap a
/// live browser session; tests substitute a scripted fake.
#[async_trait]
pub trait BrowserPage: Send + Sync {
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Types `value` into the element matching `selector`. Errors if the
    /// element is not present and interactable.
    async fn fill(&self, selector: &str, value: &str) -> Result<()>;

    /// Sends a named key ("Enter", "Tab", ...) to the element matching
    /// `selector`.
    async fn press(&self, selector: &str, key: &str) -> Result<()>;

    /// Finds the first element matching `selector`, or `None`.
    async fn locate(&self, selector: &str) -> Result<Option<Box<dyn BrowserElement>>>;

    /// Blocks until the page has settled after navigation, or errors when
    /// `timeout` expires first.
    async fn wait_for_settle(&self, timeout: Duration) -> Result<()>;

    async fn current_url(&self) -> Result<String>;
}

#[async_trait]
pub trait BrowserElement: Send + Sync {
    async fn click(&self) -> Result<()>;

    async fn attribute(&self, name: &str) -> Result<Option<String>>;

    async fn inner_text(&self) -> Result<String>;

    /// All descendant elements matching `selector`, in document order.
    async fn query_all(&self, selector: &str) -> Result<Vec<Box<dyn BrowserElement>>>;

    /// First descendant matching `selector`, or `None`.
    async fn query(&self, selector: &str) -> Result<Option<Box<dyn BrowserElement>>> {
        Ok(self.query_all(selector).await?.into_iter().next())
    }
}
