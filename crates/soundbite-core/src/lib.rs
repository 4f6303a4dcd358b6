pub mod lexicon;
pub mod quote;
pub mod segment;

pub use lexicon::{Lexicon, LexiconConfig};
pub use quote::{sentinel, Cue, Quote, TranscriptSource};
pub use segment::sentences;
