use crate::errors::VigilResult;
use crate::signal::SignalRecord;

/// Persistence operations consolidation needs. Implementations must be safe
/// to share across threads; no per-target locking is expected.
pub trait ISignalStorage: Send + Sync {
    /// Persist one record. Events and alerts are stored separately by `kind`.
    fn create(&self, record: &SignalRecord) -> VigilResult<()>;

    /// Fetch a record of either kind by id.
    fn get(&self, id: &str) -> VigilResult<Option<SignalRecord>>;

    /// All alerts for `target`, ascending by generation time then insertion order.
    fn list_alerts_ordered_by_time(&self, target: &str) -> VigilResult<Vec<SignalRecord>>;

    /// All events for `target`, ascending by generation time then insertion order.
    fn list_events_ordered_by_time(&self, target: &str) -> VigilResult<Vec<SignalRecord>>;

    /// Delete an alert if it exists. Returns whether a row was removed;
    /// a missing id is not an error.
    fn delete_by_id(&self, id: &str) -> VigilResult<bool>;

    /// Distinct targets that currently have at least one alert, sorted.
    fn list_distinct_targets_with_alerts(&self) -> VigilResult<Vec<String>>;

    /// Total number of stored alerts across all targets.
    fn count_alerts(&self) -> VigilResult<usize>;
}
