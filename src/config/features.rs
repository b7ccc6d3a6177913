//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Install the tracing subscriber
    #[serde(default = "default_true")]
    pub enable_tracing: bool,

    /// Emit logs as JSON lines instead of the human format
    #[serde(default)]
    pub json_logs: bool,

    /// Add the "if nothing changes" line to recommendations
    #[serde(default = "default_true")]
    pub cost_projection: bool,

    /// Announce when a new question restarts a flow
    #[serde(default = "default_true")]
    pub fresh_start_notice: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_tracing: true,
            json_logs: false,
            cost_projection: true,
            fresh_start_notice: true,
        }
    }
}

fn default_true() -> bool {
    true
}
