//! Schema migrations tracked with PRAGMA user_version.

pub mod v001_signal_tables;
pub mod v002_target_health;

use rusqlite::Connection;

use vigil_core::errors::{StorageError, VigilResult};

type Migration = fn(&Connection) -> VigilResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_signal_tables::migrate),
    (2, v002_target_health::migrate),
];

/// Run all pending migrations, each inside its own transaction.
pub fn run_migrations(conn: &Connection) -> VigilResult<()> {
    let current = current_version(conn)?;

    for (version, migrate) in MIGRATIONS {
        if current >= *version {
            continue;
        }
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| migration_err(*version, e.to_string()))?;
        migrate(&tx).map_err(|e| migration_err(*version, e.to_string()))?;
        tx.pragma_update(None, "user_version", version)
            .map_err(|e| migration_err(*version, e.to_string()))?;
        tx.commit()
            .map_err(|e| migration_err(*version, e.to_string()))?;
        tracing::info!(version = version, "applied migration");
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> VigilResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| migration_err(0, e.to_string()))
}

/// Drop every table the migrations create and reset the schema version.
pub fn drop_all(conn: &Connection) -> VigilResult<()> {
    conn.execute_batch(
        "
        DROP TABLE IF EXISTS target_health;
        DROP TABLE IF EXISTS signal_alerts;
        DROP TABLE IF EXISTS signal_events;
        PRAGMA user_version = 0;
        ",
    )
    .map_err(|e| crate::to_storage_err(e.to_string()))?;
    tracing::info!("dropped signal tables");
    Ok(())
}

fn migration_err(version: u32, reason: String) -> vigil_core::VigilError {
    StorageError::MigrationFailed { version, reason }.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::constants::SCHEMA_VERSION;

    #[test]
    fn migrations_reach_current_schema_version() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(current_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(current_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn drop_all_resets_version() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        drop_all(&conn).unwrap();
        assert_eq!(current_version(&conn).unwrap(), 0);
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name LIKE 'signal_%'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 0);
    }
}
