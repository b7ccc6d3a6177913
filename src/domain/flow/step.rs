//! Steps and choices.

use serde::Serialize;

use super::values::SlotKey;
use crate::domain::lexicon::normalize;

/// One selectable answer. The id is the value written to the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub id: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }

    /// Returns true if normalized typed text names this choice.
    ///
    /// Accepts the id, the id with underscores as spaces, or the label.
    pub fn is_named_by(&self, normalized: &str) -> bool {
        normalized == self.id
            || normalized == self.id.replace('_', " ")
            || normalized == normalize(self.label)
    }
}

/// Jump past intermediate steps when the answer is one of `when`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skip {
    pub when: &'static [&'static str],
    pub to: &'static str,
}

/// Where a flow goes after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Successor {
    Next,
    SkipTo(&'static str),
}

/// A question in a flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: &'static str,
    pub slot: SlotKey,
    pub prompt: &'static str,
    pub choices: Vec<Choice>,
    pub skip: Option<Skip>,
}

impl Step {
    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    /// Finds the choice a typed utterance names, if any.
    pub fn typed_choice(&self, normalized: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.is_named_by(normalized))
    }

    /// Successor rule: a pure function of the chosen value.
    pub fn successor(&self, value: &str) -> Successor {
        match self.skip {
            Some(skip) if skip.when.contains(&value) => Successor::SkipTo(skip.to),
            _ => Successor::Next,
        }
    }

    /// Display text of a chosen value, or the raw value for sentinels.
    pub fn label_of<'a>(&'a self, value: &'a str) -> &'a str {
        self.choice(value).map_or(value, |c| c.label)
    }
}
