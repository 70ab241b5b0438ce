use lopdf::Document;
use sw_core::{Error, Result};

/// Extracts the text of every page, concatenated in page order with no
/// separator beyond what each page itself yields.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| Error::Extraction(format!("Failed to open PDF: {}", e)))?;

    let mut text = String::new();
    for (page_number, _) in doc.get_pages() {
        let page_text = doc
            .extract_text(&[page_number])
            .map_err(|e| Error::Extraction(format!("Failed to extract page {}: {}", page_number, e)))?;
        text.push_str(&page_text);
    }
    Ok(text)
}
