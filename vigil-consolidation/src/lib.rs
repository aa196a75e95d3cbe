//! # vigil-consolidation
//!
//! Collapses a target's alert history into the alerts that are still
//! outstanding: forward elimination pass → best-effort purge → health summary.
//! A sweep runs this for every target with alerts and publishes the summaries.

pub mod algorithms;
pub mod monitoring;
pub mod purge;
pub mod scheduling;
pub mod service;

pub use algorithms::elimination::{eliminate, Elimination, EliminationReason, Partition};
pub use monitoring::{ConsolidationMetrics, MetricsSnapshot};
pub use purge::PurgeReport;
pub use scheduling::{sweep, SweepReport, Throttle, ThrottleConfig};
pub use service::{ConsolidationReport, ConsolidationService};
