use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::fmt;
use sw_core::notify::Notifier;
use sw_core::{Error, Result};

const PUSH_URL: &str = "https://api.pushbullet.com/v2/pushes";

#[derive(Serialize)]
struct PushRequest<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    title: &'a str,
    body: &'a str,
}

/// Pushbullet "note" sender. At most one delivery attempt per call; the
/// pipeline decides what a failed delivery means.
pub struct PushbulletNotifier {
    client: Client,
    api_key: String,
    base_url: String,
}

impl PushbulletNotifier {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, PUSH_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }
}

impl fmt::Debug for PushbulletNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushbulletNotifier")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl Notifier for PushbulletNotifier {
    async fn notify(&self, title: &str, body: &str) -> Result<()> {
        tracing::info!("Sending push notification: {}", title);
        let request = PushRequest {
            kind: "note",
            title,
            body,
        };
        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Notification(format!("Failed to reach push endpoint: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Notification(format!(
                "Push endpoint returned status {}",
                response.status()
            )));
        }
        Ok(())
    }
}
