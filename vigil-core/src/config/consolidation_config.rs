use serde::{Deserialize, Serialize};

use super::defaults;

/// Consolidation subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidationConfig {
    /// Delete eliminated alerts from the store. When false the pass is a dry run:
    /// the summary is still computed, nothing is deleted.
    pub purge_eliminated: bool,
    /// Targets consolidated by a sweep before it yields.
    pub sweep_batch_size: usize,
    /// How long a sweep yields between batches, in milliseconds.
    pub sweep_yield_ms: u64,
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            purge_eliminated: defaults::DEFAULT_PURGE_ELIMINATED,
            sweep_batch_size: defaults::DEFAULT_SWEEP_BATCH_SIZE,
            sweep_yield_ms: defaults::DEFAULT_SWEEP_YIELD_MS,
        }
    }
}
