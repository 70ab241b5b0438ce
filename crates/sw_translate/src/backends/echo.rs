use async_trait::async_trait;
use sw_core::translate::Translator;
use sw_core::Result;

/// Identity backend for tests and dry runs: every chunk translates to
/// itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoTranslator;

#[async_trait]
impl Translator for EchoTranslator {
    fn name(&self) -> &str {
        "Echo"
    }

    async fn translate_chunk(&self, text: &str, _src: &str, _dest: &str) -> Result<String> {
        Ok(text.to_string())
    }
}
