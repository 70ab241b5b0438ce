use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use sw_core::{Error, Result};
use zip::ZipArchive;

/// Extracts the text of every paragraph in `word/document.xml`, each
/// followed by a newline, in paragraph order.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| Error::Extraction(format!("Failed to open document archive: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| Error::Extraction(format!("Document body is missing: {}", e)))?
        .read_to_string(&mut xml)
        .map_err(|e| Error::Extraction(format!("Failed to read document body: {}", e)))?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_run_text = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            // Empty paragraphs still contribute a line break.
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:p" => text.push('\n'),
            Ok(Event::Text(t)) if in_run_text => {
                let run = t
                    .unescape()
                    .map_err(|e| Error::Extraction(format!("Malformed document XML: {}", e)))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Extraction(format!("Malformed document XML: {}", e)));
            }
            _ => {}
        }
    }
    Ok(text)
}
