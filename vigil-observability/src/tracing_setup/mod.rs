//! Tracing subscriber setup and the structured events Vigil emits.

pub mod events;

use tracing_subscriber::EnvFilter;

use vigil_core::config::ObservabilityConfig;
use vigil_core::constants::LOG_ENV_VAR;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `VIGIL_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Returns false if a global
/// subscriber was already installed.
pub fn init_tracing() -> bool {
    init_from_config(&ObservabilityConfig::default())
}

/// Initialize tracing from the observability config section.
/// `VIGIL_LOG` still wins over `log_level` when set.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    if config.json_logs {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}
