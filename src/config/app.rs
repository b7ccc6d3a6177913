//! App identity and logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// How the engine presents itself, and its default log filter
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
    /// Name used in app descriptions and recognized as an identity query
    #[serde(default = "default_name")]
    pub name: String,

    /// One-line description following the name
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Log filter directive, used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppSection {
    /// Validate app configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("app.name"));
        }
        Ok(())
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
            log_level: default_log_level(),
        }
    }
}

fn default_name() -> String {
    "Way of the Feather".to_string()
}

fn default_tagline() -> String {
    "Ask a real-life question. We'll slow it down first.".to_string()
}

fn default_log_level() -> String {
    "info,feather_engine=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_defaults() {
        let app = AppSection::default();
        assert_eq!(app.name, "Way of the Feather");
        assert!(app.tagline.starts_with("Ask a real-life question"));
        assert!(app.validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let app = AppSection {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            app.validate(),
            Err(ValidationError::MissingRequired("app.name"))
        ));
    }
}
