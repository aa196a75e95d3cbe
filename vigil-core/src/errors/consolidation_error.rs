/// Consolidation subsystem errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsolidationError {
    #[error("failed to delete eliminated alert {id}: {reason}")]
    DeletionFailed { id: String, reason: String },

    #[error("alert belongs to target {found}, expected {expected}")]
    TargetMismatch { expected: String, found: String },

    #[error("record {id} is not an alert")]
    NotAnAlert { id: String },

    #[error("alert {id} is older than the alert before it")]
    OutOfOrder { id: String },
}
