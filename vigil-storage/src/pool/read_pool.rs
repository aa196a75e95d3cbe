//! Read-only connections handed out round-robin. WAL lets them read while the
//! writer holds its lock.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags};

use vigil_core::errors::VigilResult;

use super::pragmas::apply_read_pragmas;
use crate::to_unavailable_err;

/// Upper bound on reader connections, whatever the config asks for.
const MAX_READERS: usize = 8;

pub struct ReadPool {
    readers: Vec<Mutex<Connection>>,
    cursor: AtomicUsize,
}

impl ReadPool {
    /// Open `size` readers on `path`, clamped to `1..=MAX_READERS`.
    pub fn open(path: &Path, size: usize, busy_timeout_ms: u32) -> VigilResult<Self> {
        let readers = (0..size.clamp(1, MAX_READERS))
            .map(|_| open_reader(path, busy_timeout_ms).map(Mutex::new))
            .collect::<VigilResult<Vec<_>>>()?;
        Ok(Self {
            readers,
            cursor: AtomicUsize::new(0),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> VigilResult<T>
    where
        F: FnOnce(&Connection) -> VigilResult<T>,
    {
        let slot = self.cursor.fetch_add(1, Ordering::Relaxed) % self.readers.len();
        let conn = self.readers[slot]
            .lock()
            .map_err(|e| to_unavailable_err(format!("reader {slot} poisoned: {e}")))?;
        f(&conn)
    }

    pub fn size(&self) -> usize {
        self.readers.len()
    }
}

fn open_reader(path: &Path, busy_timeout_ms: u32) -> VigilResult<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| to_unavailable_err(format!("open reader on {}: {e}", path.display())))?;
    apply_read_pragmas(&conn, busy_timeout_ms)?;
    Ok(conn)
}
