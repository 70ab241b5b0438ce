use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use sw_core::translate::Translator;
use sw_core::{Error, Result};

const BASE_URL: &str = "https://translate.googleapis.com";

/// Google Translate backend using the unauthenticated gtx endpoint. One GET
/// per chunk; the caller bounds chunk length below the service limit.
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GoogleTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleTranslator")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "Google"
    }

    async fn translate_chunk(&self, text: &str, src: &str, dest: &str) -> Result<String> {
        let response = self
            .client
            .get(format!("{}/translate_a/single", self.base_url))
            .query(&[("client", "gtx"), ("sl", src), ("tl", dest), ("dt", "t"), ("q", text)])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Translation(format!("Service rejected the request: {}", e)))?;

        let body: serde_json::Value = response.json().await?;

        // The gtx response is a nested array; translated segments live at
        // [0][i][0] and concatenate to the full chunk translation.
        let segments = body
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| Error::Translation("Unexpected response shape".to_string()))?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
                translated.push_str(part);
            }
        }
        Ok(translated)
    }
}
