//! Feather Engine - Guided-disclosure dialogue engine
//!
//! Classifies a free-text problem description into a life domain, walks the
//! user through a short multiple-choice interview and answers with three
//! ranked options plus one tiny next move.
//!
//! ```no_run
//! use feather_engine::DialogueEngine;
//!
//! let mut engine = DialogueEngine::with_defaults().expect("engine");
//! for entry in engine.submit_utterance("I can't focus at work") {
//!     println!("{:?}: {}", entry.speaker, entry.text);
//! }
//! for choice in engine.current_choices() {
//!     println!("[{}] {}", choice.id, choice.label);
//! }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;

pub use application::{DialogueEngine, EngineError};
pub use domain::dialogue::{ChoiceButton, Session, Speaker, TranscriptEntry};
pub use domain::foundation::Domain;
