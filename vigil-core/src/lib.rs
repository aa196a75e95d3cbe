//! # vigil-core
//!
//! Foundation crate for the Vigil alert consolidator.
//! Defines signal records, severities, summaries, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod signal;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VigilConfig;
pub use errors::{VigilError, VigilResult};
pub use models::HealthSummary;
pub use signal::{NewSignal, Severity, SignalKind, SignalRecord};
