//! Flow table validation errors.

use thiserror::Error;

use crate::domain::foundation::Domain;

/// Problems found when validating flow definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("No flow defined for domain '{0}'")]
    MissingFlow(Domain),

    #[error("Flow for '{0}' has no steps")]
    EmptyFlow(Domain),

    #[error("Flow for '{domain}' repeats step '{step}'")]
    DuplicateStep { domain: Domain, step: &'static str },

    #[error("Step '{step}' in flow '{domain}' needs at least two choices")]
    TooFewChoices { domain: Domain, step: &'static str },

    #[error("Step '{step}' in flow '{domain}' repeats choice '{choice}'")]
    DuplicateChoice {
        domain: Domain,
        step: &'static str,
        choice: &'static str,
    },

    #[error("Step '{step}' in flow '{domain}' skips to unknown step '{target}'")]
    UnknownSkipTarget {
        domain: Domain,
        step: &'static str,
        target: &'static str,
    },

    #[error("Step '{step}' in flow '{domain}' skips backward to '{target}'")]
    BackwardSkip {
        domain: Domain,
        step: &'static str,
        target: &'static str,
    },
}
