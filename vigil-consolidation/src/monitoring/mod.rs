//! Counters describing consolidation activity.

pub mod metrics;

pub use metrics::{ConsolidationMetrics, MetricsSnapshot};
