use serde::{Deserialize, Serialize};

/// Placeholder values used when true attribution is unavailable.
pub mod sentinel {
    /// Speaker for caption-cue quotes, where no name is determinable.
    pub const LIKELY_EXECUTIVE: &str = "Likely Executive";
    /// Timestamp for quotes from untimed sources.
    pub const NO_TIMESTAMP: &str = "N/A";
}

/// One extracted quote (one object in the output artifact).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub speaker: String,
    pub timestamp: String,
}

/// One decoded caption entry.
///
/// A cue with `time_range` set opens a new caption interval; a cue with
/// only `text` is continuation content for the current interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub time_range: Option<String>,
    pub text: String,
}

impl Cue {
    pub fn interval(time_range: impl Into<String>) -> Self {
        Cue {
            time_range: Some(time_range.into()),
            text: String::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Cue {
            time_range: None,
            text: text.into(),
        }
    }
}

/// A decoded transcript, ready for extraction. Decoding from the container
/// format (caption file, page-oriented document, plain text) has already
/// happened by the time one of these exists.
#[derive(Debug, Clone)]
pub enum TranscriptSource {
    /// Lines recovered from a page-oriented document.
    DocumentText(Vec<String>),
    /// Lines of a plain-text transcript.
    PlainText(Vec<String>),
    /// Timestamped caption cues (no named speakers available).
    CaptionCues(Vec<Cue>),
}
