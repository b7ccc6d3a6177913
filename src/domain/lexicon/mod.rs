//! Lexicon module.
//!
//! Normalization, keyword tables and the deterministic classifiers that
//! route an utterance to a domain, a relationship pattern, or a
//! "new question" interrupt.

mod classifier;
mod errors;
mod keywords;
mod normalizer;
mod pattern;
mod question;
mod tables;

pub use classifier::{LexicalClassifier, UtteranceClassifier};
pub use errors::LexiconError;
pub use keywords::{Keyword, KeywordSet};
pub use normalizer::normalize;
pub use pattern::classify_pattern;
pub use question::looks_like_new_question;
pub use tables::{
    DefinitionMarkers, DomainKeywords, KeywordTables, NewQuestionMarkers, PatternKeywords,
    PatternMarkers, TriangleMarkers, SUPPORTED_TABLE_VERSION,
};
