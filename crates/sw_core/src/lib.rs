pub mod browser;
pub mod error;
pub mod fetch;
pub mod notify;
pub mod storage;
pub mod translate;
pub mod types;

pub use error::Error;
pub use types::{Article, Attachment, AttachmentKind};
pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use super::browser::{BrowserElement, BrowserPage};
    pub use super::fetch::Fetcher;
    pub use super::notify::Notifier;
    pub use super::storage::ProcessedStore;
    pub use super::translate::Translator;
    pub use super::{Article, Attachment, AttachmentKind, Error, Result};
}
