use soundbite_core::{sentinel, Cue, Lexicon, Quote};

/// Running accumulation over one caption interval: the concatenated text
/// so far and the time range recorded when the interval opened.
#[derive(Debug, Default)]
struct CueAccumulator {
    text: String,
    time_range: String,
}

impl CueAccumulator {
    fn open_interval(&mut self, time_range: &str) {
        self.text.clear();
        self.time_range = time_range.to_string();
    }

    fn append(&mut self, text: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(text);
    }

    fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Extract quotes from timestamped caption cues.
///
/// Text accumulates across cues within an interval and is tested after
/// every append once it reaches `min_words`: boilerplate discards the
/// accumulation, relevance emits it as a quote, anything else keeps
/// accumulating. An accumulation that grows past `max_words` without
/// qualifying is not truncated; it is only recovered by the next interval
/// reset. That matches the shipped behavior and is kept as-is.
pub fn extract_from_cues(cues: &[Cue], lexicon: &Lexicon) -> Vec<Quote> {
    let mut quotes = Vec::new();
    let mut acc = CueAccumulator::default();

    for cue in cues {
        if let Some(time_range) = &cue.time_range {
            acc.open_interval(time_range);
        }

        let text = cue.text.trim();
        if text.is_empty() {
            continue;
        }
        acc.append(text);

        let words = acc.word_count();
        if !lexicon.word_count_in_bounds(words) {
            // Under min: no decision yet. Over max: abandoned until the
            // next interval reset.
            continue;
        }
        if lexicon.is_boilerplate(&acc.text) {
            acc.text.clear();
            continue;
        }
        if lexicon.is_relevant(&acc.text) {
            quotes.push(Quote {
                quote: acc.text.trim().to_string(),
                speaker: sentinel::LIKELY_EXECUTIVE.to_string(),
                timestamp: acc.time_range.clone(),
            });
            acc.text.clear();
            if quotes.len() >= lexicon.max_quotes() {
                break;
            }
        }
    }

    quotes
}
