//! v001: signal_events (durable history) and signal_alerts (consolidatable).
//!
//! `seq` is the insertion counter that breaks ties between equal
//! `generated_at` values.

use rusqlite::Connection;

use vigil_core::errors::VigilResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> VigilResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS signal_events (
            seq              INTEGER PRIMARY KEY AUTOINCREMENT,
            id               TEXT NOT NULL UNIQUE,
            signal_key       TEXT NOT NULL,
            counterpart_key  TEXT NOT NULL DEFAULT '',
            target           TEXT NOT NULL,
            severity         TEXT NOT NULL,
            generated_at     TEXT NOT NULL,
            description      TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_events_target_time
            ON signal_events(target, generated_at, seq);
        CREATE INDEX IF NOT EXISTS idx_events_key ON signal_events(signal_key);

        CREATE TABLE IF NOT EXISTS signal_alerts (
            seq              INTEGER PRIMARY KEY AUTOINCREMENT,
            id               TEXT NOT NULL UNIQUE,
            signal_key       TEXT NOT NULL,
            counterpart_key  TEXT NOT NULL DEFAULT '',
            target           TEXT NOT NULL,
            severity         TEXT NOT NULL,
            generated_at     TEXT NOT NULL,
            description      TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_alerts_target_time
            ON signal_alerts(target, generated_at, seq);
        CREATE INDEX IF NOT EXISTS idx_alerts_key ON signal_alerts(signal_key);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
