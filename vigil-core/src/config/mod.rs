pub mod consolidation_config;
pub mod defaults;
pub mod observability_config;
pub mod storage_config;

pub use consolidation_config::ConsolidationConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{VigilError, VigilResult};

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VigilConfig {
    pub storage: StorageConfig,
    pub consolidation: ConsolidationConfig,
    pub observability: ObservabilityConfig,
}

impl VigilConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(s: &str) -> VigilResult<Self> {
        toml::from_str(s).map_err(|e| VigilError::ConfigError(e.to_string()))
    }
}
