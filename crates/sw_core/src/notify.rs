use async_trait::async_trait;

use crate::Result;

/// A push-notification channel. One delivery attempt per call, no retries,
/// no queueing. Errors are returned so the caller decides the failure
/// policy; the pipeline logs them and moves on.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, title: &str, body: &str) -> Result<()>;
}
