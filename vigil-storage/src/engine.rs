//! StorageEngine: owns the ConnectionPool, implements ISignalStorage and
//! IHealthSink, runs migrations at startup.

use std::path::Path;

use vigil_core::config::StorageConfig;
use vigil_core::errors::VigilResult;
use vigil_core::models::HealthSummary;
use vigil_core::signal::{SignalKind, SignalRecord};
use vigil_core::traits::{IHealthSink, ISignalStorage};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{health_ops, signal_crud, signal_query};

/// The main storage engine. Constructed once by the host and shared as
/// `Arc<dyn ISignalStorage>`.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk, with default settings.
    pub fn open(path: &Path) -> VigilResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open the database named by `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> VigilResult<Self> {
        Self::open_with_config(Path::new(&config.db_path), config)
    }

    /// Open a file-backed storage engine with explicit pool and timeout settings.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> VigilResult<Self> {
        let engine = Self {
            pool: ConnectionPool::open(path, config)?,
        };
        engine.initialize()?;
        tracing::info!(
            path = %path.display(),
            readers = engine.pool.reader_count(),
            "storage opened"
        );
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> VigilResult<Self> {
        let engine = Self {
            pool: ConnectionPool::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations on the writer.
    fn initialize(&self) -> VigilResult<()> {
        self.pool.writer.with_conn(migrations::run_migrations)
    }

    /// Drop every signal and health table and recreate an empty schema.
    pub fn reset(&self) -> VigilResult<()> {
        self.pool.writer.with_conn(|conn| {
            migrations::drop_all(conn)?;
            migrations::run_migrations(conn)
        })
    }

    /// The underlying connections, for diagnostics such as pragma checks.
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// The last summary published for `target`.
    pub fn get_health(&self, target: &str) -> VigilResult<Option<HealthSummary>> {
        self.pool.with_reader(|conn| health_ops::get_health(conn, target))
    }
}

impl ISignalStorage for StorageEngine {
    fn create(&self, record: &SignalRecord) -> VigilResult<()> {
        self.pool
            .writer
            .with_conn(|conn| signal_crud::insert_signal(conn, record))
    }

    fn get(&self, id: &str) -> VigilResult<Option<SignalRecord>> {
        self.pool.with_reader(|conn| signal_crud::get_signal(conn, id))
    }

    fn list_alerts_ordered_by_time(&self, target: &str) -> VigilResult<Vec<SignalRecord>> {
        self.pool.with_reader(|conn| {
            signal_query::list_ordered_by_time(conn, SignalKind::Alert, target)
        })
    }

    fn list_events_ordered_by_time(&self, target: &str) -> VigilResult<Vec<SignalRecord>> {
        self.pool.with_reader(|conn| {
            signal_query::list_ordered_by_time(conn, SignalKind::Event, target)
        })
    }

    fn delete_by_id(&self, id: &str) -> VigilResult<bool> {
        let removed = self
            .pool
            .writer
            .with_conn(|conn| signal_crud::delete_alert(conn, id))?;
        if !removed {
            tracing::debug!(id = %id, "alert already absent");
        }
        Ok(removed)
    }

    fn list_distinct_targets_with_alerts(&self) -> VigilResult<Vec<String>> {
        self.pool.with_reader(signal_query::distinct_alert_targets)
    }

    fn count_alerts(&self) -> VigilResult<usize> {
        self.pool.with_reader(signal_query::count_alerts)
    }
}

impl IHealthSink for StorageEngine {
    fn publish(&self, summary: &HealthSummary) -> VigilResult<()> {
        self.pool
            .writer
            .with_conn(|conn| health_ops::upsert_health(conn, summary))
    }
}
