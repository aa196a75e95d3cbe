// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "vigil.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Consolidation ---
pub const DEFAULT_PURGE_ELIMINATED: bool = true;
pub const DEFAULT_SWEEP_BATCH_SIZE: usize = 10;
pub const DEFAULT_SWEEP_YIELD_MS: u64 = 50;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
