//! Domain layer containing the dialogue logic and its data.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, domain and pattern enums, session status)
//! - `lexicon` - Normalizer, keyword tables and the lexical/pattern classifiers
//! - `glossary` - Static definitions and the definition responder
//! - `flow` - Per-domain step definitions and the flow table
//! - `recommendation` - Options, best-option rules and response rendering
//! - `dialogue` - Session value and the state machine reducing turns

pub mod dialogue;
pub mod flow;
pub mod foundation;
pub mod glossary;
pub mod lexicon;
pub mod recommendation;
