//! Transcript entries and choice buttons handed to the host.

use serde::{Deserialize, Serialize};

use crate::domain::flow::Choice;

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    System,
}

/// One line for the host to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl TranscriptEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::System,
            text: text.into(),
        }
    }
}

/// A selectable answer for the current step. The host binds each button to
/// `select_choice(id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceButton {
    pub id: String,
    pub label: String,
}

impl From<&Choice> for ChoiceButton {
    fn from(choice: &Choice) -> Self {
        Self {
            id: choice.id.to_string(),
            label: choice.label.to_string(),
        }
    }
}
