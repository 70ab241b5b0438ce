use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Feed not found: {0}")]
    FeedNotFound(String),

    #[error("No article found: {0}")]
    NoArticle(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Driver error: {0}")]
    Driver(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Whether this error aborts the run. Notification delivery is the one
    /// collaborator whose failures the pipeline recovers from locally.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::Notification(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
