//! Ordered and aggregate reads over the signal tables.

use rusqlite::{params, Connection};

use vigil_core::errors::VigilResult;
use vigil_core::signal::{SignalKind, SignalRecord};

use super::signal_crud::{row_to_signal, SIGNAL_COLUMNS};
use super::table_for;
use crate::to_storage_err;

/// Records of `kind` for `target`, ascending by generation time, ties by insertion.
pub fn list_ordered_by_time(
    conn: &Connection,
    kind: SignalKind,
    target: &str,
) -> VigilResult<Vec<SignalRecord>> {
    let sql = format!(
        "SELECT {SIGNAL_COLUMNS} FROM {} WHERE target = ?1 ORDER BY generated_at ASC, seq ASC",
        table_for(kind)
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![target], |row| Ok(row_to_signal(row, kind)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(records)
}

/// Distinct targets with at least one alert, sorted.
pub fn distinct_alert_targets(conn: &Connection) -> VigilResult<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT DISTINCT target FROM signal_alerts ORDER BY target")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Number of alerts across all targets.
pub fn count_alerts(conn: &Connection) -> VigilResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM signal_alerts", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
