mod consolidation_error;
mod storage_error;

pub use consolidation_error::ConsolidationError;
pub use storage_error::StorageError;

/// Top-level error for every Vigil operation.
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("consolidation error: {0}")]
    ConsolidationError(#[from] ConsolidationError),

    #[error("invalid signal kind: {value}")]
    InvalidKind { value: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl VigilError {
    /// True when the error means the store could not be reached or queried.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, VigilError::StorageError(_))
    }
}

pub type VigilResult<T> = Result<T, VigilError>;
