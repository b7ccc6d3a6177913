//! Dialogue module - Session value and the state machine driving flows.

mod machine;
mod messages;
mod session;
mod transcript;

pub use machine::{DialogueEvent, DialogueMachine, Reduction};
pub use messages::{ABSORBED, FRESH_START};
pub use session::Session;
pub use transcript::{ChoiceButton, Speaker, TranscriptEntry};
