pub mod backends;

use std::sync::Arc;
use sw_core::translate::Translator;
use sw_core::{Error, Result};

pub use backends::{EchoTranslator, GoogleTranslator};

pub mod prelude {
    pub use super::{ChunkedTranslator, EchoTranslator, GoogleTranslator};
    pub use sw_core::translate::Translator;
}

/// Splits arbitrary-length text into bounded chunks, translates each in
/// order, and joins the results with a single space.
///
/// The remote service enforces a hard per-call length limit, so chunk
/// boundaries may fall inside words; that approximation is accepted rather
/// than snapped to word boundaries.
pub struct ChunkedTranslator {
    backend: Arc<dyn Translator>,
    chunk_size: usize,
}

impl ChunkedTranslator {
    /// `chunk_size` is a character bound and must be positive and below the
    /// remote service's hard limit.
    pub fn new(backend: Arc<dyn Translator>, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::Translation(
                "Chunk size must be a positive character count".to_string(),
            ));
        }
        Ok(Self { backend, chunk_size })
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Empty input yields empty output without touching the remote service.
    /// Any chunk failure propagates; downstream notifications depend on
    /// having translated text.
    pub async fn translate(&self, text: &str, src: &str, dest: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let chunks = split_chunks(text, self.chunk_size);
        tracing::debug!("Translating {} chunk(s) from {} to {}", chunks.len(), src, dest);

        let mut translated = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            translated.push(self.backend.translate_chunk(chunk, src, dest).await?);
        }
        Ok(translated.join(" "))
    }
}

/// Consecutive, non-overlapping substrings of at most `chunk_size`
/// characters, in original order, final chunk possibly shorter. Boundaries
/// are character counts, never byte offsets inside a UTF-8 scalar.
fn split_chunks(text: &str, chunk_size: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in text.char_indices() {
        if count == chunk_size {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    chunks.push(&text[start..]);
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingEcho {
        calls: AtomicUsize,
    }

    impl CountingEcho {
        fn new() -> Self {
            Self { calls: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl Translator for CountingEcho {
        fn name(&self) -> &str {
            "CountingEcho"
        }

        async fn translate_chunk(&self, text: &str, _src: &str, _dest: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(text.to_string())
        }
    }

    #[test]
    fn five_chars_with_bound_two_split_as_expected() {
        assert_eq!(split_chunks("abcde", 2), vec!["ab", "cd", "e"]);
    }

    #[test]
    fn bound_larger_than_input_yields_one_chunk() {
        assert_eq!(split_chunks("abc", 10), vec!["abc"]);
    }

    #[test]
    fn chunking_respects_character_boundaries() {
        // Multi-byte characters must never be cut mid-scalar.
        let chunks = split_chunks("één brief", 3);
        assert_eq!(chunks, vec!["één", " br", "ief"]);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        assert!(ChunkedTranslator::new(Arc::new(CountingEcho::new()), 0).is_err());
    }

    #[tokio::test]
    async fn identity_backend_reproduces_chunks_joined_by_spaces() {
        let backend = Arc::new(CountingEcho::new());
        let translator = ChunkedTranslator::new(backend.clone(), 2).unwrap();

        let result = translator.translate("abcde", "nl", "en").await.unwrap();
        assert_eq!(result, "ab cd e");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn empty_input_makes_zero_remote_calls() {
        let backend = Arc::new(CountingEcho::new());
        let translator = ChunkedTranslator::new(backend.clone(), 100).unwrap();

        let result = translator.translate("", "nl", "en").await.unwrap();
        assert_eq!(result, "");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    struct FailingBackend;

    #[async_trait]
    impl Translator for FailingBackend {
        fn name(&self) -> &str {
            "Failing"
        }

        async fn translate_chunk(&self, _text: &str, _src: &str, _dest: &str) -> Result<String> {
            Err(sw_core::Error::Translation("service unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn chunk_failure_propagates() {
        let translator = ChunkedTranslator::new(Arc::new(FailingBackend), 2).unwrap();
        let err = translator.translate("abcde", "nl", "en").await.unwrap_err();
        assert!(err.is_fatal());
    }
}
