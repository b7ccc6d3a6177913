//! Slot keys, slot records and conditions over them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Value written to a slot whose step was skipped.
pub const NONE: &str = "none";

/// Value of every "not sure" choice.
pub const NOT_SURE: &str = "not_sure";

/// A named fact collected by a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKey {
    Time,
    Role,
    Repeating,
    Disturbance,
    Scope,
    Timing,
    MoneyIssue,
    Urgency,
    Cost,
    HealthConcern,
    Duration,
    Severity,
    BodyLocation,
    BodyQuality,
    Goal,
    /// Relationship pattern, set from classification when the flow starts.
    Pattern,
}

impl SlotKey {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Role => "role",
            Self::Repeating => "repeating",
            Self::Disturbance => "disturbance",
            Self::Scope => "scope",
            Self::Timing => "timing",
            Self::MoneyIssue => "money_issue",
            Self::Urgency => "urgency",
            Self::Cost => "cost",
            Self::HealthConcern => "health_concern",
            Self::Duration => "duration",
            Self::Severity => "severity",
            Self::BodyLocation => "body_location",
            Self::BodyQuality => "body_quality",
            Self::Goal => "goal",
            Self::Pattern => "pattern",
        }
    }

    /// Label used when restating collected answers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Time => "When",
            Self::Role => "Your part",
            Self::Repeating => "How often",
            Self::Disturbance => "What pulls you off track",
            Self::Scope => "What's heavy",
            Self::Timing => "Urgency",
            Self::MoneyIssue => "Money worry",
            Self::Urgency => "When it bites",
            Self::Cost => "What it costs you",
            Self::HealthConcern => "Concern",
            Self::Duration => "How long",
            Self::Severity => "How much it gets in the way",
            Self::BodyLocation => "Where you feel it",
            Self::BodyQuality => "What it feels like",
            Self::Goal => "What you want",
            Self::Pattern => "Pattern",
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Collected answers, keyed by slot. Values are choice ids or sentinels.
pub type SlotRecord = BTreeMap<SlotKey, String>;

/// Holds when `slot` is set to one of `any_of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCondition {
    pub slot: SlotKey,
    pub any_of: &'static [&'static str],
}

impl SlotCondition {
    pub const fn new(slot: SlotKey, any_of: &'static [&'static str]) -> Self {
        Self { slot, any_of }
    }

    pub fn holds(&self, slots: &SlotRecord) -> bool {
        slots
            .get(&self.slot)
            .is_some_and(|value| self.any_of.contains(&value.as_str()))
    }
}
