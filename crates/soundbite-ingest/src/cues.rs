use soundbite_core::Cue;

/// Decode caption file content into an ordered cue sequence.
///
/// A line containing `-->` opens a new interval and the whole line is kept
/// as the time range. The `WEBVTT` header line and blank lines are
/// skipped. Every other non-blank line — including bare cue identifiers —
/// is continuation text for the current interval.
pub fn parse_caption_cues(content: &str) -> Vec<Cue> {
    let mut cues = Vec::new();
    for raw in content.lines() {
        let line = raw.trim();
        if line.contains("-->") {
            cues.push(Cue::interval(line));
        } else if line.is_empty() || line.to_lowercase().starts_with("webvtt") {
            continue;
        } else {
            cues.push(Cue::text(line));
        }
    }
    cues
}
