//! A domain's ordered steps and the walk through them.

use std::collections::HashSet;

use super::errors::FlowError;
use super::step::{Step, Successor};
use super::values::SlotKey;
use crate::domain::foundation::Domain;

/// Ordered, finite interview for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow {
    pub domain: Domain,
    /// Line shown when the flow starts.
    pub intro: &'static str,
    pub steps: Vec<Step>,
    /// Slots filled from classification rather than by a step.
    pub derived: Vec<SlotKey>,
}

/// Result of moving past a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advance<'a> {
    /// The next step to ask, or `None` when the flow is finished.
    pub next: Option<&'a Step>,
    /// Steps jumped over, in order. Their slots get the `none` sentinel.
    pub skipped: Vec<&'a Step>,
}

impl Flow {
    pub fn first_step(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    /// Applies the successor rule of step `from` for answer `value`.
    ///
    /// An unknown `from` finishes the flow.
    pub fn advance(&self, from: &str, value: &str) -> Advance<'_> {
        let Some(index) = self.position(from) else {
            return Advance {
                next: None,
                skipped: Vec::new(),
            };
        };

        let target = match self.steps[index].successor(value) {
            Successor::Next => index + 1,
            Successor::SkipTo(id) => self.position(id).unwrap_or(index + 1),
        };

        Advance {
            next: self.steps.get(target),
            skipped: self.steps[index + 1..target.max(index + 1)].iter().collect(),
        }
    }

    /// Every slot a completed record must hold.
    pub fn required_slots(&self) -> impl Iterator<Item = SlotKey> + '_ {
        self.steps
            .iter()
            .map(|s| s.slot)
            .chain(self.derived.iter().copied())
    }

    pub fn validate(&self) -> Result<(), FlowError> {
        if self.steps.is_empty() {
            return Err(FlowError::EmptyFlow(self.domain));
        }

        let mut step_ids = HashSet::new();
        for step in &self.steps {
            if !step_ids.insert(step.id) {
                return Err(FlowError::DuplicateStep {
                    domain: self.domain,
                    step: step.id,
                });
            }
            if step.choices.len() < 2 {
                return Err(FlowError::TooFewChoices {
                    domain: self.domain,
                    step: step.id,
                });
            }
            let mut choice_ids = HashSet::new();
            for choice in &step.choices {
                if !choice_ids.insert(choice.id) {
                    return Err(FlowError::DuplicateChoice {
                        domain: self.domain,
                        step: step.id,
                        choice: choice.id,
                    });
                }
            }
        }

        for (index, step) in self.steps.iter().enumerate() {
            let Some(skip) = step.skip else { continue };
            match self.position(skip.to) {
                None => {
                    return Err(FlowError::UnknownSkipTarget {
                        domain: self.domain,
                        step: step.id,
                        target: skip.to,
                    })
                }
                Some(target) if target <= index => {
                    return Err(FlowError::BackwardSkip {
                        domain: self.domain,
                        step: step.id,
                        target: skip.to,
                    })
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}
