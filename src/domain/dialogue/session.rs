//! The dialogue session value.

use crate::domain::flow::SlotRecord;
use crate::domain::foundation::{Domain, SessionId, SessionStatus, StateMachine};

/// Everything the machine knows about the conversation in progress.
///
/// # Invariants
///
/// - `Idle` sessions have no domain, no step and no slots
/// - `Collecting` sessions have a domain with a flow and a current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: SessionId,
    pub status: SessionStatus,
    pub domain: Option<Domain>,
    /// Id of the step awaiting an answer.
    pub step: Option<&'static str>,
    pub slots: SlotRecord,
    /// The utterance that started the current flow.
    pub utterance: Option<String>,
}

impl Session {
    /// Creates an empty, idle session with a fresh id.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            status: SessionStatus::Idle,
            domain: None,
            step: None,
            slots: SlotRecord::new(),
            utterance: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.status == SessionStatus::Idle
    }

    /// Returns to `Idle` through the lifecycle, dropping the flow state.
    ///
    /// A fresh id is minted so the next interview logs separately.
    pub(crate) fn reset(&mut self) {
        self.set_status(SessionStatus::Idle);
        self.id = SessionId::new();
        self.domain = None;
        self.step = None;
        self.slots.clear();
        self.utterance = None;
    }

    /// Moves to `target` if the lifecycle allows it.
    ///
    /// An illegal move is logged and ignored; the dialogue never fails.
    pub(crate) fn set_status(&mut self, target: SessionStatus) {
        match self.status.transition_to(target) {
            Ok(next) => self.status = next,
            Err(err) => tracing::warn!(
                session_id = %self.id,
                from = %self.status,
                to = %target,
                error = %err,
                "Ignored illegal status transition"
            ),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
