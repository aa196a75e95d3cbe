//! Insert, get, delete for signal records.

use rusqlite::{params, Connection, OptionalExtension, Row};

use vigil_core::errors::VigilResult;
use vigil_core::signal::{Severity, SignalKind, SignalRecord};

use super::{decode_time, encode_time, table_for};
use crate::to_storage_err;

/// Columns selected for every signal read, in `row_to_signal` order.
pub(crate) const SIGNAL_COLUMNS: &str =
    "id, signal_key, counterpart_key, target, severity, generated_at, description";

/// Insert a record into the table for its kind.
pub fn insert_signal(conn: &Connection, record: &SignalRecord) -> VigilResult<()> {
    let generated_at = encode_time(&record.generated_at)?;
    let sql = format!(
        "INSERT INTO {} ({SIGNAL_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        table_for(record.kind)
    );
    conn.execute(
        &sql,
        params![
            record.id,
            record.key,
            record.counterpart_key,
            record.target,
            record.severity.as_str(),
            generated_at,
            record.description,
        ],
    )
    .map_err(|e| to_storage_err(format!("insert {}: {e}", record.id)))?;
    Ok(())
}

/// Get a record by id, looking at alerts first and then events.
pub fn get_signal(conn: &Connection, id: &str) -> VigilResult<Option<SignalRecord>> {
    for kind in [SignalKind::Alert, SignalKind::Event] {
        let sql = format!("SELECT {SIGNAL_COLUMNS} FROM {} WHERE id = ?1", table_for(kind));
        let found = conn
            .query_row(&sql, params![id], |row| Ok(row_to_signal(row, kind)))
            .optional()
            .map_err(|e| to_storage_err(e.to_string()))?;
        if let Some(record) = found {
            return record.map(Some);
        }
    }
    Ok(None)
}

/// Delete an alert if present. Returns whether a row was removed.
pub fn delete_alert(conn: &Connection, id: &str) -> VigilResult<bool> {
    let rows = conn
        .execute("DELETE FROM signal_alerts WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(format!("delete {id}: {e}")))?;
    Ok(rows > 0)
}

/// Map a row selected with `SIGNAL_COLUMNS` to a record of the given kind.
pub(crate) fn row_to_signal(row: &Row<'_>, kind: SignalKind) -> VigilResult<SignalRecord> {
    let get = |idx: usize| -> VigilResult<String> {
        row.get(idx).map_err(|e| to_storage_err(e.to_string()))
    };
    Ok(SignalRecord {
        id: get(0)?,
        key: get(1)?,
        counterpart_key: get(2)?,
        target: get(3)?,
        kind,
        severity: Severity::parse(&get(4)?),
        generated_at: decode_time(&get(5)?)?,
        description: get(6)?,
    })
}
