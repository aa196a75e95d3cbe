//! One serialized writer plus, for file-backed stores, a pool of readers.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::Path;

use rusqlite::Connection;

use vigil_core::config::StorageConfig;
use vigil_core::errors::VigilResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// The writer and the optional reader pool of one database.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    /// `None` for in-memory stores: a second in-memory connection would be a
    /// separate, empty database, so every read goes through the writer.
    pub readers: Option<ReadPool>,
}

impl ConnectionPool {
    /// Open the writer and `config.read_pool_size` readers on `path`.
    pub fn open(path: &Path, config: &StorageConfig) -> VigilResult<Self> {
        let writer = WriteConnection::open(path, config.busy_timeout_ms)?;
        let readers = ReadPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        Ok(Self {
            writer,
            readers: Some(readers),
        })
    }

    /// A private in-memory database with no reader pool.
    pub fn open_in_memory() -> VigilResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
            readers: None,
        })
    }

    /// Run a read-only closure on a reader when there are any, else on the writer.
    pub fn with_reader<F, T>(&self, f: F) -> VigilResult<T>
    where
        F: FnOnce(&Connection) -> VigilResult<T>,
    {
        match &self.readers {
            Some(readers) => readers.with_conn(f),
            None => self.writer.with_conn(f),
        }
    }

    /// Number of reader connections; zero in memory.
    pub fn reader_count(&self) -> usize {
        self.readers.as_ref().map_or(0, ReadPool::size)
    }
}
