//! Lookup of flows by domain.

use std::collections::BTreeMap;

use super::definitions::flow_for_domain;
use super::errors::FlowError;
use super::sequence::Flow;
use crate::domain::foundation::Domain;

/// All flows the machine can run, one per life domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowTable {
    flows: BTreeMap<Domain, Flow>,
}

impl FlowTable {
    /// The shipped flows.
    pub fn standard() -> Self {
        Self::from_flows(
            Domain::flow_domains()
                .iter()
                .filter_map(|&domain| flow_for_domain(domain)),
        )
    }

    pub fn from_flows(flows: impl IntoIterator<Item = Flow>) -> Self {
        Self {
            flows: flows.into_iter().map(|f| (f.domain, f)).collect(),
        }
    }

    pub fn get(&self, domain: Domain) -> Option<&Flow> {
        self.flows.get(&domain)
    }

    /// Checks every flow, and that each life domain has one.
    pub fn validate(&self) -> Result<(), FlowError> {
        for &domain in Domain::flow_domains() {
            self.get(domain)
                .ok_or(FlowError::MissingFlow(domain))?
                .validate()?;
        }
        Ok(())
    }
}

impl Default for FlowTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_is_valid() {
        assert!(FlowTable::standard().validate().is_ok());
    }

    #[test]
    fn missing_domain_fails_validation() {
        let table = FlowTable::from_flows(flow_for_domain(Domain::Work));
        assert_eq!(
            table.validate(),
            Err(FlowError::MissingFlow(Domain::Daily))
        );
    }

    #[test]
    fn definition_is_never_in_the_table() {
        assert!(FlowTable::standard().get(Domain::Definition).is_none());
    }
}
