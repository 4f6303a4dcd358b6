/// Split a block of prose into sentence-like spans.
///
/// A boundary is a sentence-terminal character (`.`, `!`, `?`) followed by
/// whitespace. No abbreviation handling: "U.S. economy" splits after
/// "U.S." — accepted over-segmentation, kept deliberately.
pub fn sentences(block: &str) -> Sentences<'_> {
    Sentences { rest: block }
}

/// Lazy sentence iterator over a borrowed block. `Clone` it to iterate
/// the remaining spans again from the same position.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.trim_start();
        if rest.is_empty() {
            self.rest = "";
            return None;
        }

        let mut end = rest.len();
        let mut after_terminal = false;
        for (i, c) in rest.char_indices() {
            if after_terminal && c.is_whitespace() {
                end = i;
                break;
            }
            after_terminal = matches!(c, '.' | '!' | '?');
        }

        let (span, tail) = rest.split_at(end);
        self.rest = tail;
        Some(span.trim_end())
    }
}
