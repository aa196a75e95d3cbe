//! v002: target_health, the latest published summary per target.

use rusqlite::Connection;

use vigil_core::errors::VigilResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> VigilResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS target_health (
            target      TEXT PRIMARY KEY,
            warnings    INTEGER NOT NULL DEFAULT 0,
            criticals   INTEGER NOT NULL DEFAULT 0,
            updated_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_health_severity
            ON target_health(criticals, warnings);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
