use chrono::Utc;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use sw_core::browser::{BrowserElement, BrowserPage};
use sw_core::fetch::Fetcher;
use sw_core::notify::Notifier;
use sw_core::storage::ProcessedStore;
use sw_core::{Article, Attachment, Error, Result};
use sw_translate::ChunkedTranslator;

use crate::site::SiteConfig;

/// Login credentials for the monitored portal.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Per-run knobs beyond the site selectors.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub source_lang: String,
    pub dest_lang: String,
    /// When set, extracted and translated attachment text is archived under
    /// a dated subdirectory of this path.
    pub archive_dir: Option<PathBuf>,
    pub settle_timeout: Duration,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            source_lang: "nl".to_string(),
            dest_lang: "en".to_string(),
            archive_dir: None,
            settle_timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Debug)]
pub enum RunOutcome {
    /// The newest post had already been handled; nothing was sent.
    AlreadySeen { id: String },
    /// A new post was processed end to end.
    Processed { id: String, attachments: usize },
}

/// Drives one authenticate → detect → process pass over the feed.
///
/// All collaborator calls are awaited one at a time in state-machine order;
/// the processed-id store is appended to before any extraction or
/// translation work, so a crash mid-article can drop notifications but
/// never duplicate them.
pub struct FeedPipeline {
    page: Box<dyn BrowserPage>,
    store: Arc<dyn ProcessedStore>,
    translator: ChunkedTranslator,
    notifier: Arc<dyn Notifier>,
    fetcher: Arc<dyn Fetcher>,
    site: SiteConfig,
    credentials: Credentials,
    options: PipelineOptions,
}

impl FeedPipeline {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        page: Box<dyn BrowserPage>,
        store: Arc<dyn ProcessedStore>,
        translator: ChunkedTranslator,
        notifier: Arc<dyn Notifier>,
        fetcher: Arc<dyn Fetcher>,
        site: SiteConfig,
        credentials: Credentials,
        options: PipelineOptions,
    ) -> Self {
        Self {
            page,
            store,
            translator,
            notifier,
            fetcher,
            site,
            credentials,
            options,
        }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        self.authenticate().await?;

        let feed = self
            .page
            .locate(&self.site.feed_selector)
            .await?
            .ok_or_else(|| {
                Error::FeedNotFound(format!("No element matches {}", self.site.feed_selector))
            })?;

        // The site presents entries most-recent-first.
        let entry = feed
            .query(&self.site.article_selector)
            .await?
            .ok_or_else(|| Error::NoArticle("The feed has no entries".to_string()))?;
        tracing::info!("📰 Newest feed entry located");

        let title = match entry.query(&self.site.title_selector).await? {
            Some(element) => element.inner_text().await?,
            None => String::new(),
        };
        let id = self.derive_id(entry.as_ref(), &title).await?;

        if !self.store.try_add(&id).await {
            tracing::info!("⏭️ Article {} was already processed, nothing to do", id);
            return Ok(RunOutcome::AlreadySeen { id });
        }
        tracing::info!("🆕 Processing new article {}", id);

        let body = self.read_body(entry.as_ref()).await?;
        let attachments = self.collect_attachments(entry.as_ref()).await?;
        let article = Article {
            id,
            title,
            body,
            attachments,
        };

        self.notify_best_effort(&article.title, &article.body).await;
        let translated_title = self.translate(&article.title).await?;
        let translated_body = self.translate(&article.body).await?;
        self.notify_best_effort(&translated_title, &translated_body).await;

        if article.attachments.is_empty() {
            tracing::info!("No attachments; the article body notification covers the post");
            return Ok(RunOutcome::Processed {
                id: article.id,
                attachments: 0,
            });
        }

        for attachment in &article.attachments {
            self.process_attachment(attachment).await?;
        }

        Ok(RunOutcome::Processed {
            id: article.id,
            attachments: article.attachments.len(),
        })
    }

    async fn authenticate(&self) -> Result<()> {
        tracing::info!("Navigating to {}", self.site.login_url);
        self.page.navigate(&self.site.login_url).await?;

        self.page
            .fill(&self.site.username_selector, &self.credentials.username)
            .await
            .map_err(|e| Error::Authentication(format!("Username field unavailable: {}", e)))?;
        self.page
            .fill(&self.site.password_selector, &self.credentials.password)
            .await
            .map_err(|e| Error::Authentication(format!("Password field unavailable: {}", e)))?;
        self.page
            .press(&self.site.password_selector, "Enter")
            .await
            .map_err(|e| Error::Authentication(format!("Could not submit the login form: {}", e)))?;
        self.page
            .wait_for_settle(self.options.settle_timeout)
            .await
            .map_err(|e| Error::Authentication(format!("Page did not settle after login: {}", e)))?;

        let url = self.page.current_url().await?;
        if !url.contains(&self.site.authenticated_url_fragment) {
            return Err(Error::Authentication(format!(
                "Expected a URL containing '{}' after login, got {}",
                self.site.authenticated_url_fragment, url
            )));
        }
        tracing::info!("🔐 Logged in successfully");
        Ok(())
    }

    async fn derive_id(&self, entry: &dyn BrowserElement, title: &str) -> Result<String> {
        if let Some(id) = entry.attribute(&self.site.id_attribute).await? {
            if !id.is_empty() {
                return Ok(id);
            }
        }

        // No stable site id: synthesize one from the title and the entry's
        // declared time. Without a declared time the current date stands
        // in, which keeps the id stable only within one calendar day.
        let timestamp = match entry.query(&self.site.time_selector).await? {
            Some(element) => match element.attribute("datetime").await? {
                Some(declared) if !declared.is_empty() => declared,
                _ => element.inner_text().await?,
            },
            None => Utc::now().format("%Y-%m-%d").to_string(),
        };
        Ok(Article::synthesized_id(title, &timestamp))
    }

    async fn read_body(&self, entry: &dyn BrowserElement) -> Result<String> {
        self.expand_truncated(entry).await?;
        match entry.query(&self.site.body_selector).await? {
            Some(element) => element.inner_text().await,
            None => {
                tracing::debug!(
                    "No element matches {}, treating the body as empty",
                    self.site.body_selector
                );
                Ok(String::new())
            }
        }
    }

    /// Best-effort: the control only exists on truncated posts.
    async fn expand_truncated(&self, entry: &dyn BrowserElement) -> Result<()> {
        for button in entry.query_all("button").await? {
            if button.inner_text().await?.trim() == self.site.expand_label {
                tracing::debug!("Expanding truncated article text");
                button.click().await?;
                break;
            }
        }
        Ok(())
    }

    async fn collect_attachments(&self, entry: &dyn BrowserElement) -> Result<Vec<Attachment>> {
        let mut attachments = Vec::new();
        for link in entry.query_all("a").await? {
            if let Some(href) = link.attribute("href").await? {
                if let Some(attachment) = Attachment::from_url(&href) {
                    attachments.push(attachment);
                }
            }
        }
        Ok(attachments)
    }

    async fn process_attachment(&self, attachment: &Attachment) -> Result<()> {
        tracing::info!("📎 Processing attachment {}", attachment.filename);
        let bytes = self.fetcher.fetch(&attachment.url).await?;
        let text = sw_extract::extract(&bytes, attachment.kind)?;

        self.archive(&attachment.filename, None, &text).await?;
        self.notify_best_effort(
            &format!("Original {}: {}", attachment.kind, attachment.filename),
            &text,
        )
        .await;

        let translated = self.translate(&text).await?;
        self.archive(&attachment.filename, Some(&self.options.dest_lang), &translated)
            .await?;
        self.notify_best_effort(
            &format!("Translated {}: {}", attachment.kind, attachment.filename),
            &translated,
        )
        .await;
        Ok(())
    }

    async fn translate(&self, text: &str) -> Result<String> {
        self.translator
            .translate(text, &self.options.source_lang, &self.options.dest_lang)
            .await
    }

    /// Delivery failures are logged and swallowed; a failed notification
    /// never aborts the run.
    async fn notify_best_effort(&self, title: &str, body: &str) {
        if let Err(e) = self.notifier.notify(title, body).await {
            tracing::warn!("Notification delivery failed, continuing: {}", e);
        }
    }

    async fn archive(&self, filename: &str, lang: Option<&str>, text: &str) -> Result<()> {
        let Some(dir) = &self.options.archive_dir else {
            return Ok(());
        };
        let target_dir = dir.join(Utc::now().format("%Y-%m-%d").to_string());
        tokio::fs::create_dir_all(&target_dir).await?;

        let stem = filename
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(filename);
        let name = match lang {
            Some(lang) => format!("{}.{}.txt", stem, lang),
            None => format!("{}.txt", stem),
        };
        let path = target_dir.join(name);
        tokio::fs::write(&path, text).await?;
        tracing::info!("Saved {}", path.display());
        Ok(())
    }
}
