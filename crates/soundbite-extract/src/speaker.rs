use soundbite_core::{sentences, sentinel, Lexicon, Quote};

/// Lines attributed to one speaker, collected between a marker line and
/// the flush that ends the block.
#[derive(Debug)]
struct SpeakerBuffer {
    speaker: String,
    lines: Vec<String>,
}

impl SpeakerBuffer {
    fn new(speaker: String) -> Self {
        SpeakerBuffer {
            speaker,
            lines: Vec::new(),
        }
    }

    /// Join the buffered lines, segment into sentences, and append every
    /// qualifying span to `quotes`. Stops at the extractor-wide cap.
    fn flush(&self, lexicon: &Lexicon, quotes: &mut Vec<Quote>) {
        let block = self.lines.join(" ");
        for span in sentences(&block) {
            if quotes.len() >= lexicon.max_quotes() {
                break;
            }
            let words = span.split_whitespace().count();
            if lexicon.word_count_in_bounds(words) && lexicon.is_relevant(span) {
                quotes.push(Quote {
                    quote: span.to_string(),
                    speaker: self.speaker.clone(),
                    timestamp: sentinel::NO_TIMESTAMP.to_string(),
                });
            }
        }
    }
}

/// Extractor state: either waiting for a speaker marker or collecting
/// lines under one.
#[derive(Debug)]
enum State {
    Idle,
    Collecting(SpeakerBuffer),
}

/// Return the first configured speaker whose name appears in `line`.
/// First-match is deliberate: priority follows `known_speakers` order,
/// not position in the line.
fn match_speaker(line: &str, lexicon: &Lexicon) -> Option<String> {
    lexicon
        .known_speakers()
        .iter()
        .find(|name| line.contains(name.as_str()))
        .cloned()
}

/// Extract quotes from an ordered sequence of transcript lines with
/// named-speaker markers (document-derived or plain text).
///
/// A line containing a known speaker name opens a block under that
/// speaker (the marker line itself is not buffered). A blank line flushes
/// the block and returns to idle; a new marker flushes the prior block
/// under the prior speaker first. End of input flushes any remainder.
pub fn extract_from_lines(lines: &[String], lexicon: &Lexicon) -> Vec<Quote> {
    let mut quotes = Vec::new();
    let mut state = State::Idle;

    for raw in lines {
        let line = raw.trim();

        if let Some(speaker) = match_speaker(line, lexicon) {
            if let State::Collecting(buffer) = &state {
                if !buffer.lines.is_empty() {
                    buffer.flush(lexicon, &mut quotes);
                }
            }
            state = State::Collecting(SpeakerBuffer::new(speaker));
            continue;
        }

        if let State::Collecting(buffer) = &mut state {
            if line.is_empty() {
                if !buffer.lines.is_empty() {
                    buffer.flush(lexicon, &mut quotes);
                    state = State::Idle;
                    if quotes.len() >= lexicon.max_quotes() {
                        return quotes;
                    }
                }
            } else {
                buffer.lines.push(line.to_string());
            }
        }
    }

    if let State::Collecting(buffer) = &state {
        if !buffer.lines.is_empty() && quotes.len() < lexicon.max_quotes() {
            buffer.flush(lexicon, &mut quotes);
        }
    }

    quotes.truncate(lexicon.max_quotes());
    quotes
}
