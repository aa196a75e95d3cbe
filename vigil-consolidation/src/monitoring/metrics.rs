//! Lock-free run counters shared by every caller of a service.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Cumulative consolidation counters.
#[derive(Debug, Default)]
pub struct ConsolidationMetrics {
    runs: AtomicU64,
    store_failures: AtomicU64,
    eliminated: AtomicU64,
    deleted: AtomicU64,
    already_absent: AtomicU64,
    deletion_failures: AtomicU64,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub runs: u64,
    pub store_failures: u64,
    pub eliminated: u64,
    pub deleted: u64,
    pub already_absent: u64,
    pub deletion_failures: u64,
}

impl ConsolidationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_run(
        &self,
        eliminated: usize,
        deleted: usize,
        already_absent: usize,
        deletion_failures: usize,
    ) {
        self.runs.fetch_add(1, Ordering::Relaxed);
        self.eliminated.fetch_add(eliminated as u64, Ordering::Relaxed);
        self.deleted.fetch_add(deleted as u64, Ordering::Relaxed);
        self.already_absent
            .fetch_add(already_absent as u64, Ordering::Relaxed);
        self.deletion_failures
            .fetch_add(deletion_failures as u64, Ordering::Relaxed);
    }

    pub(crate) fn record_store_failure(&self) {
        self.store_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            runs: self.runs.load(Ordering::Relaxed),
            store_failures: self.store_failures.load(Ordering::Relaxed),
            eliminated: self.eliminated.load(Ordering::Relaxed),
            deleted: self.deleted.load(Ordering::Relaxed),
            already_absent: self.already_absent.load(Ordering::Relaxed),
            deletion_failures: self.deletion_failures.load(Ordering::Relaxed),
        }
    }
}
