mod cues;
mod document;
mod plain;

pub use cues::parse_caption_cues;
pub use document::read_document_lines;
pub use plain::read_plain_lines;

use soundbite_core::TranscriptSource;
use std::path::{Path, PathBuf};

/// Source decoding failures. Unsupported extensions and whole-source
/// decode failures are fatal to the run; per-page extraction failures
/// inside a document are absorbed (the page contributes no text).
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("unsupported source extension: {path} (expected .vtt, .pdf, or .txt)")]
    UnsupportedExtension { path: PathBuf },

    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode document {path}")]
    DocumentDecode {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },
}

/// Recognized transcript container formats, dispatched by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    CaptionCues,
    Document,
    PlainText,
}

impl SourceKind {
    /// Dispatch on the extension, case-insensitively. The rest of the
    /// path is left untouched.
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("vtt") => Ok(SourceKind::CaptionCues),
            Some("pdf") => Ok(SourceKind::Document),
            Some("txt") => Ok(SourceKind::PlainText),
            _ => Err(IngestError::UnsupportedExtension {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Decode a source file into a `TranscriptSource` for extraction.
pub fn load_source(path: &Path) -> Result<TranscriptSource, IngestError> {
    match SourceKind::from_path(path)? {
        SourceKind::CaptionCues => {
            let content = std::fs::read_to_string(path).map_err(|source| IngestError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(TranscriptSource::CaptionCues(parse_caption_cues(&content)))
        }
        SourceKind::Document => Ok(TranscriptSource::DocumentText(read_document_lines(path)?)),
        SourceKind::PlainText => Ok(TranscriptSource::PlainText(read_plain_lines(path)?)),
    }
}
