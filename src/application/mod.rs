//! Application layer - The engine facade hosts embed.
//!
//! Wires configuration, keyword tables and the domain services into one
//! [`DialogueEngine`] that owns the session.

mod engine;
mod error;

pub use engine::DialogueEngine;
pub use error::EngineError;
