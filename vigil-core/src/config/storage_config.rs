use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the SQLite store lives and how its connections behave.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file, relative to the host's working directory unless absolute.
    pub db_path: String,
    /// How long a connection waits on a locked database before failing.
    pub busy_timeout_ms: u32,
    /// Reader connections for a file-backed store, clamped to 1..=8.
    pub read_pool_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: defaults::DEFAULT_DB_FILENAME.to_string(),
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
            read_pool_size: defaults::DEFAULT_READ_POOL_SIZE,
        }
    }
}
