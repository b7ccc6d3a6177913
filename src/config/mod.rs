//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables and an optional file using the `config` and `dotenvy` crates.
//! Configuration is loaded with the `FEATHER` prefix and nested values use
//! double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use feather_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Running as {}", config.app.name);
//! ```

mod app;
mod error;
mod features;
mod lexicon;

pub use app::AppSection;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use lexicon::LexiconConfig;

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "FEATHER";

/// Root engine configuration
///
/// Every section has defaults, so an empty environment yields a working
/// engine. Load using [`EngineConfig::load()`].
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EngineConfig {
    /// App identity and log filter
    #[serde(default)]
    pub app: AppSection,

    /// Keyword table source
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FEATHER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `FEATHER__APP__NAME=Quill` -> `app.name = "Quill"`
    /// - `FEATHER__LEXICON__KEYWORD_TABLE=/etc/feather/keywords.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables on top
    ///
    /// The format follows the file extension (TOML, YAML, JSON).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or unreadable, or if
    /// values cannot be parsed into expected types.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty app name or a keyword table
    /// path that does not point at a file.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.app.validate()?;
        self.lexicon.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("FEATHER__APP__NAME");
        env::remove_var("FEATHER__APP__TAGLINE");
        env::remove_var("FEATHER__LEXICON__KEYWORD_TABLE");
        env::remove_var("FEATHER__FEATURES__COST_PROJECTION");
        env::remove_var("FEATHER__FEATURES__JSON_LOGS");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = EngineConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.app.name, "Way of the Feather");
        assert!(config.lexicon.keyword_table.is_none());
        assert!(config.features.cost_projection);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FEATHER__APP__NAME", "Quill");
        env::set_var("FEATHER__FEATURES__COST_PROJECTION", "false");
        let result = EngineConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.app.name, "Quill");
        assert!(!config.features.cost_projection);
        assert!(config.features.fresh_start_notice);
    }

    #[test]
    fn test_load_from_toml_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[app]\nname = \"Feather Lab\"\n\n[features]\njson_logs = true"
        )
        .unwrap();

        let config = EngineConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.app.name, "Feather Lab");
        assert!(config.features.json_logs);
        assert!(config.features.enable_tracing);
    }

    #[test]
    fn test_environment_beats_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[app]\nname = \"From File\"").unwrap();
        env::set_var("FEATHER__APP__NAME", "From Env");
        let result = EngineConfig::load_from_file(file.path());
        clear_env();

        assert_eq!(result.unwrap().app.name, "From Env");
    }

    #[test]
    fn test_missing_config_file_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let result = EngineConfig::load_from_file(Path::new("/definitely/not/feather.toml"));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_missing_keyword_table() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FEATHER__LEXICON__KEYWORD_TABLE", "/definitely/not/keywords.yaml");
        let result = EngineConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::KeywordTableNotFound(_))
        ));
    }
}
