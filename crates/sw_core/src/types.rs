use serde::{Deserialize, Serialize};
use std::fmt;

/// One post read from the monitored feed. Rebuilt from the live page on
/// every run; only its id outlives the run, in the processed-id store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub body: String,
    pub attachments: Vec<Attachment>,
}

impl Article {
    /// Identifier for posts without a site-provided id. Deterministic for a
    /// given title and timestamp pair.
    pub fn synthesized_id(title: &str, timestamp: &str) -> String {
        format!("{}_{}", title, timestamp)
    }
}

/// A linked binary document referenced from an article body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub url: String,
    pub filename: String,
    pub kind: AttachmentKind,
}

impl Attachment {
    /// Classifies a link by its URL suffix with the query string stripped.
    /// Matching is case-sensitive; the site serves lowercase extensions.
    pub fn from_url(url: &str) -> Option<Self> {
        let path = url.split('?').next().unwrap_or(url);
        let kind = if path.ends_with(".pdf") {
            AttachmentKind::Pdf
        } else if path.ends_with(".docx") {
            AttachmentKind::Docx
        } else {
            return None;
        };
        let filename = path.rsplit('/').next().unwrap_or(path).to_string();
        Some(Self {
            url: url.to_string(),
            filename,
            kind,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentKind {
    Pdf,
    Docx,
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentKind::Pdf => write!(f, "PDF"),
            AttachmentKind::Docx => write!(f, "DOCX"),
        }
    }
}
