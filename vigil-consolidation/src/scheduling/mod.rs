//! Sweeps across every target with alerts, throttled between batches.

pub mod sweep;
pub mod throttle;

pub use sweep::{sweep, SweepReport};
pub use throttle::{Throttle, ThrottleConfig};
