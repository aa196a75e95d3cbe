use crate::errors::VigilResult;
use crate::models::HealthSummary;

/// Receiver of per-target health summaries (the inventory side).
pub trait IHealthSink: Send + Sync {
    fn publish(&self, summary: &HealthSummary) -> VigilResult<()>;
}
