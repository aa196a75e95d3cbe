//! Best-effort deletion of eliminated alerts.
//!
//! Every deletion is independent and idempotent. A failure is logged and
//! collected; it never stops the loop and never changes the summary already
//! computed from the in-memory survivors.

use serde::Serialize;

use vigil_core::errors::ConsolidationError;
use vigil_core::traits::ISignalStorage;
use vigil_observability::tracing_setup::events;

use crate::algorithms::elimination::Elimination;

/// What happened to each eliminated alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PurgeReport {
    /// Ids this purge removed.
    pub deleted: Vec<String>,
    /// Ids that were already gone (another pass got there first).
    pub already_absent: Vec<String>,
    /// Deletions the store refused.
    #[serde(skip)]
    pub failures: Vec<ConsolidationError>,
}

impl PurgeReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Eliminated alerts no longer in the store, by us or anyone else.
    pub fn gone(&self) -> usize {
        self.deleted.len() + self.already_absent.len()
    }
}

/// Delete every eliminated alert, in elimination order.
pub fn purge(storage: &dyn ISignalStorage, target: &str, eliminated: &[Elimination]) -> PurgeReport {
    let mut report = PurgeReport::default();
    for elimination in eliminated {
        let id = &elimination.record.id;
        match storage.delete_by_id(id) {
            Ok(true) => report.deleted.push(id.clone()),
            Ok(false) => report.already_absent.push(id.clone()),
            Err(e) => {
                let reason = e.to_string();
                events::deletion_failed(id, target, &reason);
                report.failures.push(ConsolidationError::DeletionFailed {
                    id: id.clone(),
                    reason,
                });
            }
        }
    }
    report
}
