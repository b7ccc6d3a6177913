//! Tracing subscriber setup for hosts embedding the engine.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::EngineConfig;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    InitFailed(String),
}

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` wins over `app.log_level`. Returns `Ok(false)` when tracing
/// is switched off in the feature flags.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &EngineConfig) -> Result<bool, TelemetryError> {
    if !config.features.enable_tracing {
        return Ok(false);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.app.log_level));

    let result = if config.features.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    result.map_err(|e| TelemetryError::InitFailed(e.to_string()))?;
    Ok(true)
}
