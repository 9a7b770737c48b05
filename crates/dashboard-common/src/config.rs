//! Metrics collection policy

use serde::Deserialize;

/// Policy applied when assembling pod metrics from raw samples
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Maximum samples retained per usage history
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_history_limit() -> usize {
    15
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}

impl MetricsConfig {
    /// Load configuration from `DASHBOARD_*` environment variables
    pub fn load() -> crate::error::Result<Self> {
        Self::from_environment(config::Environment::with_prefix("DASHBOARD"))
    }

    fn from_environment(environment: config::Environment) -> crate::error::Result<Self> {
        let config = config::Config::builder()
            .add_source(environment.try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Override the history bound
    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }
}
