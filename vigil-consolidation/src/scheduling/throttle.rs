//! Pausing between sweep batches so ingestion writes get the writer lock.

use std::time::Duration;

use vigil_core::config::ConsolidationConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrottleConfig {
    /// Targets consolidated back to back before a pause. Never zero.
    pub batch_size: usize,
    pub pause: Duration,
}

impl From<&ConsolidationConfig> for ThrottleConfig {
    fn from(config: &ConsolidationConfig) -> Self {
        Self {
            batch_size: config.sweep_batch_size.max(1),
            pause: Duration::from_millis(config.sweep_yield_ms),
        }
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self::from(&ConsolidationConfig::default())
    }
}

/// Counts targets in the current batch.
#[derive(Debug)]
pub struct Throttle {
    config: ThrottleConfig,
    in_batch: usize,
}

impl Throttle {
    pub fn new(config: ThrottleConfig) -> Self {
        Self {
            config,
            in_batch: 0,
        }
    }

    /// Note one finished target. Returns the pause to take when the batch is full.
    pub fn after_target(&mut self) -> Option<Duration> {
        self.in_batch += 1;
        if self.in_batch < self.config.batch_size {
            return None;
        }
        self.in_batch = 0;
        (!self.config.pause.is_zero()).then_some(self.config.pause)
    }
}
