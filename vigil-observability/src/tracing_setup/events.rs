//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a newly persisted signal.
pub fn signal_recorded(id: &str, target: &str, kind: &str, key: &str) {
    tracing::debug!(
        event = "signal_recorded",
        id = %id,
        target_id = %target,
        kind = %kind,
        key = %key,
        "signal recorded"
    );
}

/// Log one alert removed by the elimination pass.
pub fn alert_eliminated(id: &str, target: &str, eliminated_by: &str, reason: &str) {
    tracing::debug!(
        event = "alert_eliminated",
        id = %id,
        target_id = %target,
        eliminated_by = %eliminated_by,
        reason = %reason,
        "alert eliminated"
    );
}

/// Log a per-record deletion failure. Never fatal.
pub fn deletion_failed(id: &str, target: &str, error: &str) {
    tracing::warn!(
        event = "deletion_failed",
        id = %id,
        target_id = %target,
        error = %error,
        "failed to delete eliminated alert"
    );
}

/// Log a completed consolidation of one target.
pub fn consolidation_completed(
    target: &str,
    survivors: usize,
    eliminated: usize,
    warnings: usize,
    criticals: usize,
) {
    tracing::info!(
        event = "consolidation_completed",
        target_id = %target,
        survivors = survivors,
        eliminated = eliminated,
        warnings = warnings,
        criticals = criticals,
        "consolidation completed"
    );
}

/// Log a completed sweep across all targets.
pub fn sweep_completed(targets: usize, failed: usize) {
    tracing::info!(
        event = "sweep_completed",
        targets = targets,
        failed = failed,
        "sweep completed"
    );
}
