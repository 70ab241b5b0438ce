mod config;

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use config::Config;
use sw_core::storage::ProcessedStore;
use sw_core::translate::Translator;
use sw_core::{Error, Result};
use sw_feed::{Credentials, FeedPipeline, HttpFetcher, PipelineOptions, RunOutcome, SiteConfig, WebDriverSession};
use sw_notify::PushbulletNotifier;
use sw_storage::JsonFileStore;
use sw_translate::{ChunkedTranslator, EchoTranslator, GoogleTranslator};

const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
const DEFAULT_STORE_PATH: &str = "processed_articles.json";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "schoolwatch.toml")]
    config: PathBuf,
    /// Overrides the processed-article store location
    #[arg(long)]
    store: Option<PathBuf>,
    /// Overrides the WebDriver endpoint
    #[arg(long)]
    webdriver_url: Option<String>,
    #[arg(long, default_value = "google", help = "Translation backend. Available backends: google (default), echo")]
    translator: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    let store_path = cli
        .store
        .or(config.store_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));
    let store: Arc<dyn ProcessedStore> = Arc::new(JsonFileStore::new(store_path));

    let backend: Arc<dyn Translator> = match cli.translator.as_str() {
        "google" => Arc::new(GoogleTranslator::new()),
        "echo" => Arc::new(EchoTranslator),
        other => {
            return Err(Error::Config(format!("Unknown translation backend: {}", other)));
        }
    };
    let translator = ChunkedTranslator::new(backend, config.translation.chunk_size)?;
    info!("🌐 Translation backend initialized (using {})", translator.backend_name());

    let notifier = Arc::new(PushbulletNotifier::new(config.notification.api_key.clone()));
    let fetcher = Arc::new(HttpFetcher::new());

    let webdriver_url = cli
        .webdriver_url
        .or(config.webdriver_url.clone())
        .unwrap_or_else(|| DEFAULT_WEBDRIVER_URL.to_string());
    let session = WebDriverSession::connect(&webdriver_url).await?;
    info!("🚗 Browser session opened against {}", webdriver_url);

    let pipeline = FeedPipeline::new(
        Box::new(session.clone()),
        store,
        translator,
        notifier,
        fetcher,
        SiteConfig::default(),
        Credentials {
            username: config.site.username.clone(),
            password: config.site.password.clone(),
        },
        PipelineOptions {
            source_lang: config.translation.source_lang.clone(),
            dest_lang: config.translation.dest_lang.clone(),
            archive_dir: config.archive_dir.clone(),
            ..Default::default()
        },
    );

    let outcome = pipeline.run().await;
    if let Err(e) = session.close().await {
        warn!("Failed to close browser session: {}", e);
    }

    match outcome? {
        RunOutcome::Processed { id, attachments } => {
            info!("✅ Processed article {} ({} attachment(s))", id, attachments);
        }
        RunOutcome::AlreadySeen { id } => {
            info!("⏭️ Article {} was already handled, nothing sent", id);
        }
    }
    Ok(())
}
