//! Error types for keyword-table loading.

use std::path::PathBuf;

use crate::domain::foundation::Domain;

/// Errors raised while loading or validating keyword tables.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("Failed to read keyword table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Keyword table is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unsupported keyword table version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Keyword set '{0}' is empty")]
    EmptyKeywordSet(String),

    #[error("Domain {0:?} listed more than once in the domain priority order")]
    DuplicateDomain(Domain),

    #[error("Domain {0:?} has no flow and cannot appear in the domain priority order")]
    NotAFlowDomain(Domain),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_version_mentions_both_versions() {
        let err = LexiconError::UnsupportedVersion {
            found: 7,
            supported: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains("supported: 1"));
    }

    #[test]
    fn empty_set_names_the_set() {
        let err = LexiconError::EmptyKeywordSet("domains.work".to_string());
        assert_eq!(err.to_string(), "Keyword set 'domains.work' is empty");
    }
}
