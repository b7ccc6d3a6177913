//! Recommendation module.
//!
//! Three fixed options per domain, an ordered rule table choosing the best
//! one, and the renderer producing the final response text.

mod options;
mod rules;
mod synthesizer;

pub use options::{options_for_domain, OptionLabel, OptionRecord};
pub use rules::{decision_table_for_domain, BestRule, Decision, DecisionTable};
pub use synthesizer::{Recommendation, Synthesizer};
