//! Keyword table configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where classification keywords come from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LexiconConfig {
    /// YAML file replacing the built-in keyword table
    pub keyword_table: Option<PathBuf>,
}

impl LexiconConfig {
    /// Validate lexicon configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.keyword_table {
            Some(path) if !path.is_file() => {
                Err(ValidationError::KeywordTableNotFound(path.clone()))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_override_is_valid() {
        assert!(LexiconConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_override_rejected() {
        let config = LexiconConfig {
            keyword_table: Some(PathBuf::from("/definitely/not/here.yaml")),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::KeywordTableNotFound(_))
        ));
    }

    #[test]
    fn test_existing_override_accepted() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = LexiconConfig {
            keyword_table: Some(file.path().to_path_buf()),
        };
        assert!(config.validate().is_ok());
    }
}
