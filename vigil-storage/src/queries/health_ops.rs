//! Latest published health summary per target.

use rusqlite::{params, Connection, OptionalExtension};

use vigil_core::errors::VigilResult;
use vigil_core::models::HealthSummary;

use crate::to_storage_err;

/// Insert or replace the summary for its target.
pub fn upsert_health(conn: &Connection, summary: &HealthSummary) -> VigilResult<()> {
    conn.execute(
        "INSERT INTO target_health (target, warnings, criticals) VALUES (?1, ?2, ?3)
         ON CONFLICT(target) DO UPDATE SET
            warnings = excluded.warnings,
            criticals = excluded.criticals,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![
            summary.target,
            summary.warnings as i64,
            summary.criticals as i64
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// The last summary published for `target`, if any.
pub fn get_health(conn: &Connection, target: &str) -> VigilResult<Option<HealthSummary>> {
    conn.query_row(
        "SELECT target, warnings, criticals FROM target_health WHERE target = ?1",
        params![target],
        |row| {
            Ok(HealthSummary {
                target: row.get(0)?,
                warnings: row.get::<_, i64>(1)? as usize,
                criticals: row.get::<_, i64>(2)? as usize,
            })
        },
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}
