//! Minimal W3C WebDriver client covering the DOM surface the pipeline
//! needs. Points at a running chromedriver or geckodriver endpoint; the
//! session lives for exactly one run.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use sw_core::browser::{BrowserElement, BrowserPage};
use sw_core::{Error, Result};

const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";
const SETTLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

fn key_sequence(key: &str) -> String {
    match key {
        "Enter" => "\u{e007}".to_string(),
        "Tab" => "\u{e004}".to_string(),
        "Escape" => "\u{e00c}".to_string(),
        other => other.to_string(),
    }
}

fn element_id(value: &Value) -> Result<String> {
    value[ELEMENT_KEY]
        .as_str()
        .map(|id| id.to_string())
        .ok_or_else(|| Error::Driver(format!("Response is not an element reference: {}", value)))
}

#[derive(Clone)]
pub struct WebDriverSession {
    client: Client,
    base_url: String,
    session_id: String,
}

impl WebDriverSession {
    /// Opens a headless browser session against a WebDriver endpoint.
    pub async fn connect(base_url: &str) -> Result<Self> {
        let client = Client::new();
        let base_url = base_url.trim_end_matches('/').to_string();
        let capabilities = json!({
            "capabilities": {
                "alwaysMatch": {
                    "goog:chromeOptions": { "args": ["--headless=new", "--disable-gpu"] }
                }
            }
        });
        let value: Value = client
            .post(format!("{}/session", base_url))
            .json(&capabilities)
            .send()
            .await?
            .json()
            .await?;
        let session_id = value["value"]["sessionId"]
            .as_str()
            .ok_or_else(|| Error::Driver(format!("WebDriver returned no session id: {}", value)))?
            .to_string();
        tracing::debug!("Opened WebDriver session {}", session_id);
        Ok(Self {
            client,
            base_url,
            session_id,
        })
    }

    pub async fn close(&self) -> Result<()> {
        self.command(Method::DELETE, "", None).await?;
        tracing::debug!("Closed WebDriver session {}", self.session_id);
        Ok(())
    }

    async fn command(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let url = if path.is_empty() {
            format!("{}/session/{}", self.base_url, self.session_id)
        } else {
            format!("{}/session/{}/{}", self.base_url, self.session_id, path)
        };
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let value: Value = request.send().await?.json().await?;
        if let Some(error) = value["value"]["error"].as_str() {
            let message = value["value"]["message"].as_str().unwrap_or("");
            return Err(Error::Driver(format!("{}: {}", error, message)));
        }
        Ok(value["value"].clone())
    }

    fn element(&self, element_id: String) -> WebDriverElement {
        WebDriverElement {
            session: self.clone(),
            element_id,
        }
    }

    async fn find_element(&self, root: Option<&str>, selector: &str) -> Result<Option<WebDriverElement>> {
        let path = match root {
            Some(id) => format!("element/{}/element", id),
            None => "element".to_string(),
        };
        let body = json!({ "using": "css selector", "value": selector });
        match self.command(Method::POST, &path, Some(body)).await {
            Ok(value) => Ok(Some(self.element(element_id(&value)?))),
            Err(Error::Driver(message)) if message.starts_with("no such element") => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn find_elements(&self, root: &str, selector: &str) -> Result<Vec<WebDriverElement>> {
        let body = json!({ "using": "css selector", "value": selector });
        let value = self
            .command(Method::POST, &format!("element/{}/elements", root), Some(body))
            .await?;
        let references = value
            .as_array()
            .ok_or_else(|| Error::Driver(format!("Response is not an element list: {}", value)))?;
        references
            .iter()
            .map(|reference| element_id(reference).map(|id| self.element(id)))
            .collect()
    }

    async fn execute(&self, script: &str) -> Result<Value> {
        self.command(
            Method::POST,
            "execute/sync",
            Some(json!({ "script": script, "args": [] })),
        )
        .await
    }
}

#[async_trait]
impl BrowserPage for WebDriverSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.command(Method::POST, "url", Some(json!({ "url": url })))
            .await?;
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        let element = self
            .find_element(None, selector)
            .await?
            .ok_or_else(|| Error::Driver(format!("No element matches {}", selector)))?;
        self.command(
            Method::POST,
            &format!("element/{}/clear", element.element_id),
            Some(json!({})),
        )
        .await?;
        self.command(
            Method::POST,
            &format!("element/{}/value", element.element_id),
            Some(json!({ "text": value })),
        )
        .await?;
        Ok(())
    }

    async fn press(&self, selector: &str, key: &str) -> Result<()> {
        let element = self
            .find_element(None, selector)
            .await?
            .ok_or_else(|| Error::Driver(format!("No element matches {}", selector)))?;
        self.command(
            Method::POST,
            &format!("element/{}/value", element.element_id),
            Some(json!({ "text": key_sequence(key) })),
        )
        .await?;
        Ok(())
    }

    async fn locate(&self, selector: &str) -> Result<Option<Box<dyn BrowserElement>>> {
        Ok(self
            .find_element(None, selector)
            .await?
            .map(|element| Box::new(element) as Box<dyn BrowserElement>))
    }

    /// WebDriver has no network-idle signal; document readiness is the
    /// closest observable proxy.
    async fn wait_for_settle(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            let state = self.execute("return document.readyState").await?;
            if state.as_str() == Some("complete") {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(Error::Driver(format!(
                    "Page did not settle within {:?}",
                    timeout
                )));
            }
            tokio::time::sleep(SETTLE_POLL_INTERVAL).await;
        }
    }

    async fn current_url(&self) -> Result<String> {
        let value = self.command(Method::GET, "url", None).await?;
        value
            .as_str()
            .map(|url| url.to_string())
            .ok_or_else(|| Error::Driver(format!("Current URL is not a string: {}", value)))
    }
}

pub struct WebDriverElement {
    session: WebDriverSession,
    element_id: String,
}

#[async_trait]
impl BrowserElement for WebDriverElement {
    async fn click(&self) -> Result<()> {
        self.session
            .command(
                Method::POST,
                &format!("element/{}/click", self.element_id),
                Some(json!({})),
            )
            .await?;
        Ok(())
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        let value = self
            .session
            .command(
                Method::GET,
                &format!("element/{}/attribute/{}", self.element_id, name),
                None,
            )
            .await?;
        Ok(value.as_str().map(|attribute| attribute.to_string()))
    }

    async fn inner_text(&self) -> Result<String> {
        let value = self
            .session
            .command(Method::GET, &format!("element/{}/text", self.element_id), None)
            .await?;
        value
            .as_str()
            .map(|text| text.to_string())
            .ok_or_else(|| Error::Driver(format!("Element text is not a string: {}", value)))
    }

    async fn query_all(&self, selector: &str) -> Result<Vec<Box<dyn BrowserElement>>> {
        let elements = self.session.find_elements(&self.element_id, selector).await?;
        Ok(elements
            .into_iter()
            .map(|element| Box::new(element) as Box<dyn BrowserElement>)
            .collect())
    }

    async fn query(&self, selector: &str) -> Result<Option<Box<dyn BrowserElement>>> {
        Ok(self
            .session
            .find_element(Some(&self.element_id), selector)
            .await?
            .map(|element| Box::new(element) as Box<dyn BrowserElement>))
    }
}
