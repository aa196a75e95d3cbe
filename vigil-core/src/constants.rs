/// Vigil system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current schema version written by the storage migrations.
pub const SCHEMA_VERSION: u32 = 2;

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "VIGIL_LOG";
