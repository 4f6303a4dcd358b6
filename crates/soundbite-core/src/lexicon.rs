use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::path::Path;

/// Lexicon configuration as it appears on disk (YAML) or as the built-in
/// default. Every field falls back to the default lexicon, so a file may
/// override only the parts it cares about.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexiconConfig {
    pub relevance_keywords: Vec<String>,
    pub action_verbs: Vec<String>,
    pub boilerplate_patterns: Vec<String>,
    pub known_speakers: Vec<String>,
    pub min_words: usize,
    pub max_words: usize,
    pub max_quotes: usize,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        LexiconConfig {
            relevance_keywords: to_strings(&[
                "revenue",
                "guidance",
                "growth",
                "outlook",
                "AI",
                "artificial intelligence",
                "margin",
                "EPS",
                "earnings",
                "demand",
                "forecast",
                "segment",
                "data center",
                "automotive",
                "products",
                "shareholder",
                "capital",
                "gross",
                "net",
                "customer",
                "record",
                "strong",
                "accelerated",
                "decline",
                "increase",
                "surge",
                "conversion",
                "monetization",
            ]),
            action_verbs: to_strings(&[
                "delivered",
                "grew",
                "expanded",
                "drove",
                "achieved",
                "reported",
                "generated",
                "improved",
                "declined",
                "accelerated",
                "forecast",
                "expect",
                "see",
                "guiding",
                "surpassed",
            ]),
            boilerplate_patterns: to_strings(&[
                r"press \*1",
                r"conference call",
                r"replay",
                r"mute",
                r"telephone keypad",
                r"welcome",
                r"ladies and gentlemen",
                r"operator",
                r"question and answer",
                r"Q&A",
                r"forward-looking",
                r"cautionary statement",
                r"SEC",
                r"regulation",
                r"safe harbor",
            ]),
            known_speakers: to_strings(&["Mark Zuckerberg", "Susan Li"]),
            min_words: 10,
            max_words: 50,
            max_quotes: 10,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Compiled, immutable lexicon. Built once at startup and shared by every
/// extractor; keywords and verbs are pre-lowercased, boilerplate patterns
/// are compiled case-insensitive.
#[derive(Debug)]
pub struct Lexicon {
    keywords: Vec<String>,
    verbs: Vec<String>,
    boilerplate: Vec<Regex>,
    known_speakers: Vec<String>,
    min_words: usize,
    max_words: usize,
    max_quotes: usize,
}

impl Lexicon {
    /// Compile a config into a usable lexicon, validating its invariants.
    pub fn compile(config: LexiconConfig) -> anyhow::Result<Self> {
        if config.min_words > config.max_words {
            anyhow::bail!(
                "lexicon: min_words ({}) exceeds max_words ({})",
                config.min_words,
                config.max_words
            );
        }
        if config.max_quotes == 0 {
            anyhow::bail!("lexicon: max_quotes must be positive");
        }

        let mut boilerplate = Vec::with_capacity(config.boilerplate_patterns.len());
        for pattern in &config.boilerplate_patterns {
            let re = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| anyhow::anyhow!("lexicon: bad boilerplate pattern {pattern:?}: {e}"))?;
            boilerplate.push(re);
        }

        Ok(Lexicon {
            keywords: config
                .relevance_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
            verbs: config.action_verbs.iter().map(|v| v.to_lowercase()).collect(),
            boilerplate,
            known_speakers: config.known_speakers,
            min_words: config.min_words,
            max_words: config.max_words,
            max_quotes: config.max_quotes,
        })
    }

    /// Load a lexicon from an optional YAML file; `None` compiles the
    /// built-in default.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("lexicon: cannot read {}: {e}", path.display()))?;
                serde_yaml::from_str(&content)
                    .map_err(|e| anyhow::anyhow!("lexicon: cannot parse {}: {e}", path.display()))?
            }
            None => LexiconConfig::default(),
        };
        Self::compile(config)
    }

    /// Relevance predicate: at least one keyword and at least one action
    /// verb present as a case-insensitive substring. Checks nothing else;
    /// boilerplate and length are the caller's concern.
    pub fn is_relevant(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.keywords.iter().any(|k| text.contains(k.as_str()))
            && self.verbs.iter().any(|v| text.contains(v.as_str()))
    }

    /// True if any boilerplate pattern matches anywhere in `text`.
    pub fn is_boilerplate(&self, text: &str) -> bool {
        self.boilerplate.iter().any(|re| re.is_match(text))
    }

    /// True if `count` lies within `[min_words, max_words]`.
    pub fn word_count_in_bounds(&self, count: usize) -> bool {
        count >= self.min_words && count <= self.max_words
    }

    pub fn known_speakers(&self) -> &[String] {
        &self.known_speakers
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn max_quotes(&self) -> usize {
        self.max_quotes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn default_lexicon() -> Lexicon {
        Lexicon::compile(LexiconConfig::default()).unwrap()
    }

    #[test]
    fn relevant_needs_keyword_and_verb() {
        let lex = default_lexicon();
        assert!(lex.is_relevant("We delivered record revenue this quarter"));
        // Keyword without verb
        assert!(!lex.is_relevant("Revenue was a number"));
        // Verb without keyword
        assert!(!lex.is_relevant("We delivered a package yesterday"));
    }

    #[test]
    fn relevance_is_case_insensitive() {
        let lex = default_lexicon();
        assert!(lex.is_relevant("REVENUE GREW substantially"));
        assert!(lex.is_relevant("revenue grew substantially"));
    }

    #[test]
    fn boilerplate_matches_case_insensitively() {
        let lex = default_lexicon();
        assert!(lex.is_boilerplate("This call may contain FORWARD-LOOKING statements"));
        assert!(lex.is_boilerplate("please press *1 on your telephone keypad"));
        assert!(!lex.is_boilerplate("We grew revenue across every segment"));
    }

    #[test]
    fn word_bounds_are_inclusive() {
        let lex = default_lexicon();
        assert!(!lex.word_count_in_bounds(9));
        assert!(lex.word_count_in_bounds(10));
        assert!(lex.word_count_in_bounds(50));
        assert!(!lex.word_count_in_bounds(51));
    }

    #[test]
    fn compile_rejects_inverted_bounds() {
        let config = LexiconConfig {
            min_words: 50,
            max_words: 10,
            ..LexiconConfig::default()
        };
        assert!(Lexicon::compile(config).is_err());
    }

    #[test]
    fn compile_rejects_zero_cap() {
        let config = LexiconConfig {
            max_quotes: 0,
            ..LexiconConfig::default()
        };
        assert!(Lexicon::compile(config).is_err());
    }

    #[test]
    fn compile_rejects_bad_pattern() {
        let config = LexiconConfig {
            boilerplate_patterns: vec!["[unclosed".to_string()],
            ..LexiconConfig::default()
        };
        assert!(Lexicon::compile(config).is_err());
    }

    #[test]
    fn load_yaml_overrides_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("lexicon.yaml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "relevance_keywords: [widgets]").unwrap();
        writeln!(f, "action_verbs: [shipped]").unwrap();
        writeln!(f, "min_words: 3").unwrap();
        writeln!(f, "max_words: 20").unwrap();
        drop(f);

        let lex = Lexicon::load(Some(&path)).unwrap();
        assert!(lex.is_relevant("we shipped many widgets"));
        assert!(!lex.is_relevant("we delivered record revenue"));
        assert_eq!(lex.min_words(), 3);
        // Untouched fields keep the built-in default
        assert_eq!(lex.max_quotes(), 10);
        assert!(lex.is_boilerplate("safe harbor"));
    }

    #[test]
    fn load_none_uses_builtin_default() {
        let lex = Lexicon::load(None).unwrap();
        assert_eq!(lex.known_speakers()[0], "Mark Zuckerberg");
        assert_eq!(lex.max_words(), 50);
    }

    #[test]
    fn load_rejects_unknown_field() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("lexicon.yaml");
        std::fs::write(&path, "relevance_keyword_typo: [x]\n").unwrap();
        assert!(Lexicon::load(Some(&path)).is_err());
    }
}
