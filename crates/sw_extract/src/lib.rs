pub mod docx;
pub mod pdf;

use sw_core::{AttachmentKind, Result};

/// Converts a downloaded document into plain text. The byte stream must be
/// a valid document of the declared kind.
pub fn extract(bytes: &[u8], kind: AttachmentKind) -> Result<String> {
    tracing::debug!("Extracting text from {} document ({} bytes)", kind, bytes.len());
    match kind {
        AttachmentKind::Pdf => pdf::extract_text(bytes),
        AttachmentKind::Docx => docx::extract_text(bytes),
    }
}
