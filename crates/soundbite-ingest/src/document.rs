use crate::IngestError;
use std::path::Path;

/// Decode a page-oriented document into an ordered sequence of lines.
///
/// Pages are extracted in page order. A page whose text extraction fails
/// contributes an empty string rather than aborting the run, which shows
/// up as one blank line after the page texts are joined. Only a failure
/// to open the document at all is fatal.
pub fn read_document_lines(path: &Path) -> Result<Vec<String>, IngestError> {
    let doc = lopdf::Document::load(path).map_err(|source| IngestError::DocumentDecode {
        path: path.to_path_buf(),
        source,
    })?;

    let mut pages = Vec::new();
    for &page_number in doc.get_pages().keys() {
        let text = doc.extract_text(&[page_number]).unwrap_or_default();
        pages.push(text);
    }

    Ok(pages
        .join("\n")
        .lines()
        .map(|line| line.to_string())
        .collect())
}
