//! Errors raised while building an engine.

use thiserror::Error;

use crate::config::ValidationError;
use crate::domain::flow::FlowError;
use crate::domain::lexicon::LexiconError;

/// Construction failed. Once built, the engine never fails.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("Keyword table error: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("Flow table error: {0}")]
    Flow(#[from] FlowError),
}
