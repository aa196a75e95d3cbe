//! Single write connection behind a mutex. Writes are serialized.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use vigil_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use vigil_core::errors::VigilResult;

use super::pragmas::apply_pragmas;
use crate::{to_storage_err, to_unavailable_err};

/// A single write connection protected by a mutex.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a new write connection to the given database path.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> VigilResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| to_unavailable_err(format!("open {}: {e}", path.display())))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> VigilResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, DEFAULT_BUSY_TIMEOUT_MS)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> VigilResult<T>
    where
        F: FnOnce(&Connection) -> VigilResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_unavailable_err(format!("write lock poisoned: {e}")))?;
        f(&guard)
    }
}
