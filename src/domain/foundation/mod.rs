//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Feather dialogue engine.

mod errors;
mod ids;
mod life_domain;
mod pattern;
mod session_status;
mod state_machine;

pub use errors::ValidationError;
pub use ids::SessionId;
pub use life_domain::Domain;
pub use pattern::Pattern;
pub use session_status::SessionStatus;
pub use state_machine::StateMachine;
