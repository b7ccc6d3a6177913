//! SessionStatus enum tracking where a dialogue session is in its lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a dialogue session.
///
/// - `Idle`: no flow is active; the next utterance is classified.
/// - `Collecting`: a flow is active and a step awaits a choice.
/// - `Complete`: the last step was answered; the recommendation is being
///   emitted. The session returns to `Idle` within the same turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Idle,
    Collecting,
    Complete,
}

impl SessionStatus {
    /// Returns true if a step is waiting for an answer.
    pub fn awaits_choice(&self) -> bool {
        matches!(self, SessionStatus::Collecting)
    }

    /// Returns true if the interrupt rule applies in this status.
    pub fn is_interruptible(&self) -> bool {
        !matches!(self, SessionStatus::Idle)
    }
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!(
            (self, target),
            // Classification starts a flow
            (Idle, Collecting) |
            // Answer advances to the next step
            (Collecting, Collecting) |
            // Last answer given
            (Collecting, Complete) |
            // Interrupted by a new question
            (Collecting, Idle) |
            // Recommendation emitted
            (Complete, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionStatus::*;
        match self {
            Idle => vec![Collecting],
            Collecting => vec![Collecting, Complete, Idle],
            Complete => vec![Idle],
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Idle => "Idle",
            SessionStatus::Collecting => "Collecting",
            SessionStatus::Complete => "Complete",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SessionStatus; 3] = [
        SessionStatus::Idle,
        SessionStatus::Collecting,
        SessionStatus::Complete,
    ];

    #[test]
    fn default_is_idle() {
        assert_eq!(SessionStatus::default(), SessionStatus::Idle);
    }

    #[test]
    fn only_collecting_awaits_choice() {
        assert!(!SessionStatus::Idle.awaits_choice());
        assert!(SessionStatus::Collecting.awaits_choice());
        assert!(!SessionStatus::Complete.awaits_choice());
    }

    #[test]
    fn idle_is_not_interruptible() {
        assert!(!SessionStatus::Idle.is_interruptible());
        assert!(SessionStatus::Collecting.is_interruptible());
    }

    #[test]
    fn idle_cannot_jump_to_complete() {
        assert!(SessionStatus::Idle
            .transition_to(SessionStatus::Complete)
            .is_err());
    }

    #[test]
    fn complete_always_returns_to_idle() {
        assert_eq!(
            SessionStatus::Complete.valid_transitions(),
            vec![SessionStatus::Idle]
        );
        assert_eq!(
            SessionStatus::Complete.transition_to(SessionStatus::Idle),
            Ok(SessionStatus::Idle)
        );
    }

    #[test]
    fn no_status_is_terminal() {
        for status in ALL {
            assert!(!status.is_terminal(), "{:?} must have an exit", status);
        }
    }

    #[test]
    fn valid_transitions_matches_can_transition_to() {
        for from in ALL {
            for to in ALL {
                assert_eq!(
                    from.valid_transitions().contains(&to),
                    from.can_transition_to(&to),
                    "{:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Collecting).unwrap(),
            "\"collecting\""
        );
    }
}
