//! The signal record and its enums.

mod kind;
mod record;
mod severity;

pub use kind::SignalKind;
pub use record::{NewSignal, SignalRecord};
pub use severity::Severity;
