//! ConsolidationService: load → eliminate → purge → summarize, per target.
//!
//! Calls are synchronous and take no lock. Two concurrent calls for the same
//! target may both try to delete the same alerts; deletes are idempotent so
//! the second one just finds the row gone.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use vigil_core::config::ConsolidationConfig;
use vigil_core::errors::VigilResult;
use vigil_core::models::HealthSummary;
use vigil_core::signal::{NewSignal, SignalRecord};
use vigil_core::traits::ISignalStorage;
use vigil_observability::tracing_setup::events;

use crate::algorithms::elimination::{self, Partition};
use crate::monitoring::ConsolidationMetrics;
use crate::purge::{self, PurgeReport};

/// Everything one consolidation of one target produced.
#[derive(Debug, Clone, Serialize)]
pub struct ConsolidationReport {
    pub summary: HealthSummary,
    pub partition: Partition,
    pub purge: PurgeReport,
    /// True when deletion was skipped by configuration.
    pub dry_run: bool,
}

/// Orchestrates consolidation against an injected store.
pub struct ConsolidationService {
    storage: Arc<dyn ISignalStorage>,
    config: ConsolidationConfig,
    metrics: ConsolidationMetrics,
}

impl ConsolidationService {
    pub fn new(storage: Arc<dyn ISignalStorage>, config: ConsolidationConfig) -> Self {
        Self {
            storage,
            config,
            metrics: ConsolidationMetrics::new(),
        }
    }

    pub fn config(&self) -> &ConsolidationConfig {
        &self.config
    }

    pub fn metrics(&self) -> &ConsolidationMetrics {
        &self.metrics
    }

    pub fn storage(&self) -> &Arc<dyn ISignalStorage> {
        &self.storage
    }

    /// Persist one signal from the ingestion layer. The kind decides whether
    /// it is durable history or a consolidatable alert.
    pub fn record(&self, signal: NewSignal) -> VigilResult<SignalRecord> {
        let record = SignalRecord::from_new(signal);
        self.storage.create(&record)?;
        events::signal_recorded(&record.id, &record.target, record.kind.as_str(), &record.key);
        Ok(record)
    }

    /// Consolidate `target` and return its outstanding Warning/Critical counts.
    pub fn consolidate(&self, target: &str) -> VigilResult<HealthSummary> {
        self.consolidate_detailed(target).map(|report| report.summary)
    }

    /// Consolidate `target`, returning the partition and purge outcome too.
    ///
    /// Store failures while loading are returned as-is. Deletion failures
    /// are logged and reported but never fail the call.
    pub fn consolidate_detailed(&self, target: &str) -> VigilResult<ConsolidationReport> {
        let alerts = self.storage.list_alerts_ordered_by_time(target).map_err(|e| {
            self.metrics.record_store_failure();
            tracing::warn!(target_id = %target, error = %e, "loading alerts failed");
            e
        })?;

        let partition = elimination::eliminate(target, alerts)?;
        for e in &partition.eliminated {
            events::alert_eliminated(&e.record.id, target, &e.eliminated_by, e.reason.as_str());
        }

        let dry_run = !self.config.purge_eliminated;
        let purge = if dry_run {
            PurgeReport::default()
        } else {
            purge::purge(self.storage.as_ref(), target, &partition.eliminated)
        };

        let summary = partition.summary(target);
        self.metrics.record_run(
            partition.eliminated.len(),
            purge.deleted.len(),
            purge.already_absent.len(),
            purge.failures.len(),
        );
        events::consolidation_completed(
            target,
            partition.survivors.len(),
            partition.eliminated.len(),
            summary.warnings,
            summary.criticals,
        );

        Ok(ConsolidationReport {
            summary,
            partition,
            purge,
            dry_run,
        })
    }

    /// Targets that currently have at least one alert.
    pub fn list_targets_with_outstanding_alerts(&self) -> VigilResult<BTreeSet<String>> {
        let targets = self
            .storage
            .list_distinct_targets_with_alerts()
            .map_err(|e| {
                self.metrics.record_store_failure();
                tracing::warn!(error = %e, "listing alert targets failed");
                e
            })?;
        Ok(targets.into_iter().collect())
    }
}
