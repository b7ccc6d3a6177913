//! Interpersonal-dynamics pattern detected in relationship utterances.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The relationship dynamic an utterance points at.
///
/// Detected once, when a relationship flow starts, and stored in the slot
/// record under the `pattern` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Two people in conflict with the speaker pulled into the middle.
    Triangle,
    /// Someone crossing a limit: control, intrusion, checking.
    Boundary,
    /// Uneven load: one person carries the work, resentment builds.
    FairShare,
    /// Denial or rewriting of what happened.
    TruthDistortion,
    /// Reactions out of proportion: flooding, shutting down, blowing up.
    Overload,
    #[default]
    Unclear,
}

impl Pattern {
    const ALL: [Pattern; 6] = [
        Pattern::Triangle,
        Pattern::Boundary,
        Pattern::FairShare,
        Pattern::TruthDistortion,
        Pattern::Overload,
        Pattern::Unclear,
    ];

    /// Parses a stored slot value back into a pattern.
    pub fn from_slot_value(value: &str) -> Option<Pattern> {
        Self::ALL.into_iter().find(|p| p.slot_value() == value)
    }

    /// Returns the slot value stored for this pattern.
    pub fn slot_value(&self) -> &'static str {
        match self {
            Pattern::Triangle => "triangle",
            Pattern::Boundary => "boundary",
            Pattern::FairShare => "fair_share",
            Pattern::TruthDistortion => "truth_distortion",
            Pattern::Overload => "overload",
            Pattern::Unclear => "unclear",
        }
    }

    /// Returns a short plain-language description.
    pub fn description(&self) -> &'static str {
        match self {
            Pattern::Triangle => "a triangle (two people, with you caught in the middle)",
            Pattern::Boundary => "a boundary being crossed",
            Pattern::FairShare => "an unfair share of the load",
            Pattern::TruthDistortion => "what happened being denied or rewritten",
            Pattern::Overload => "reactions bigger than the moment (flooding or shutting down)",
            Pattern::Unclear => "no clear pattern yet",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slot_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unclear() {
        assert_eq!(Pattern::default(), Pattern::Unclear);
    }

    #[test]
    fn from_slot_value_inverts_slot_value() {
        assert_eq!(Pattern::from_slot_value("fair_share"), Some(Pattern::FairShare));
        assert_eq!(Pattern::from_slot_value("triangle"), Some(Pattern::Triangle));
        assert_eq!(Pattern::from_slot_value("bogus"), None);
    }

    #[test]
    fn slot_value_matches_serde_name() {
        for p in [
            Pattern::Triangle,
            Pattern::Boundary,
            Pattern::FairShare,
            Pattern::TruthDistortion,
            Pattern::Overload,
            Pattern::Unclear,
        ] {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.slot_value()));
        }
    }
}
