//! Consolidate every target with alerts and publish each summary.

use serde::Serialize;

use vigil_core::errors::VigilResult;
use vigil_core::models::HealthSummary;
use vigil_core::traits::IHealthSink;
use vigil_observability::tracing_setup::events;

use super::throttle::{Throttle, ThrottleConfig};
use crate::service::ConsolidationService;

/// Outcome of one sweep.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepReport {
    /// Summaries that were computed and published.
    pub summaries: Vec<HealthSummary>,
    /// Targets that failed, with the error text.
    pub failures: Vec<(String, String)>,
    /// Times the sweep paused between batches.
    pub pauses: usize,
}

/// Consolidate every target that has alerts and publish the summaries.
///
/// Failing to list targets fails the sweep. A target whose consolidation or
/// publish fails is recorded in the report and the sweep moves on.
pub fn sweep(service: &ConsolidationService, sink: &dyn IHealthSink) -> VigilResult<SweepReport> {
    let targets = service.list_targets_with_outstanding_alerts()?;
    let mut throttle = Throttle::new(ThrottleConfig::from(service.config()));
    let mut report = SweepReport::default();

    for (index, target) in targets.iter().enumerate() {
        let result = service
            .consolidate(target)
            .and_then(|summary| sink.publish(&summary).map(|()| summary));
        match result {
            Ok(summary) => report.summaries.push(summary),
            Err(e) => {
                tracing::warn!(target_id = %target, error = %e, "sweep skipped target");
                report.failures.push((target.clone(), e.to_string()));
            }
        }
        let pause = throttle.after_target();
        if let Some(pause) = pause.filter(|_| index + 1 < targets.len()) {
            std::thread::sleep(pause);
            report.pauses += 1;
        }
    }

    events::sweep_completed(targets.len(), report.failures.len());
    Ok(report)
}
