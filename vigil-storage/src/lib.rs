//! # vigil-storage
//!
//! SQLite-backed store for signal records: one write connection, a pool of
//! read connections, versioned migrations, and the queries behind
//! `ISignalStorage` and `IHealthSink`.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use vigil_core::errors::{StorageError, VigilError};

/// Wrap a SQLite failure message as a `VigilError`.
pub(crate) fn to_storage_err(message: String) -> VigilError {
    VigilError::StorageError(StorageError::SqliteError { message })
}

/// The store could not be reached at all (lock poisoned, file unopenable).
pub(crate) fn to_unavailable_err(reason: String) -> VigilError {
    VigilError::StorageError(StorageError::Unavailable { reason })
}
