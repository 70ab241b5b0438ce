use async_trait::async_trait;

use crate::Result;

/// A machine-translation backend. Stateless per call; callers are expected
/// to keep each chunk below the service's hard length limit.
#[async_trait]
pub trait Translator: Send + Sync {
    fn name(&self) -> &str;

    /// Translates one bounded chunk of text.
    async fn translate_chunk(&self, text: &str, src: &str, dest: &str) -> Result<String>;
}
