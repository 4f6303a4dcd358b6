mod accumulate;
mod speaker;

pub use accumulate::extract_from_cues;
pub use speaker::extract_from_lines;

use soundbite_core::{Lexicon, Quote, TranscriptSource};

/// Assemble the final quote list for one transcript source.
///
/// Dispatches to the extractor for the source kind (never more than one),
/// then enforces the output cap. All admission decisions — bounds,
/// relevance, boilerplate — have already been made by the extractor.
pub fn extract_quotes(source: &TranscriptSource, lexicon: &Lexicon) -> Vec<Quote> {
    let mut quotes = match source {
        TranscriptSource::DocumentText(lines) | TranscriptSource::PlainText(lines) => {
            extract_from_lines(lines, lexicon)
        }
        TranscriptSource::CaptionCues(cues) => extract_from_cues(cues, lexicon),
    };
    quotes.truncate(lexicon.max_quotes());
    quotes
}
