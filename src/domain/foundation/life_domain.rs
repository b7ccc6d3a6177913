//! Domain enum naming the life topic a conversation is about.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The topic category an utterance is classified into.
///
/// `Definition` is answered directly by the glossary; every other variant
/// owns a slot-filling flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Definition,
    Daily,
    Relationship,
    Work,
    Money,
    Health,
}

impl Domain {
    /// Returns all domains that run a slot-filling flow.
    pub fn flow_domains() -> &'static [Domain] {
        &[
            Domain::Daily,
            Domain::Relationship,
            Domain::Work,
            Domain::Money,
            Domain::Health,
        ]
    }

    /// Returns true if this domain owns a flow.
    pub fn has_flow(&self) -> bool {
        !matches!(self, Domain::Definition)
    }

    /// Returns the key used in keyword tables and logs.
    pub fn key(&self) -> &'static str {
        match self {
            Domain::Definition => "definition",
            Domain::Daily => "daily",
            Domain::Relationship => "relationship",
            Domain::Work => "work",
            Domain::Money => "money",
            Domain::Health => "health",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::Definition => "Definition",
            Domain::Daily => "Daily life",
            Domain::Relationship => "Relationships",
            Domain::Work => "Work",
            Domain::Money => "Money",
            Domain::Health => "Health",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
