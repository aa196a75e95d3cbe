use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::VigilError;

/// Retention class of a signal.
///
/// Events are write-once history. Alerts are outstanding conditions that
/// consolidation may purge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    Event,
    Alert,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Event => "Event",
            SignalKind::Alert => "Alert",
        }
    }

    /// Whether records of this kind take part in consolidation.
    pub fn is_consolidatable(&self) -> bool {
        matches!(self, SignalKind::Alert)
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalKind {
    type Err = VigilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("event") {
            Ok(SignalKind::Event)
        } else if s.eq_ignore_ascii_case("alert") {
            Ok(SignalKind::Alert)
        } else {
            Err(VigilError::InvalidKind {
                value: s.to_string(),
            })
        }
    }
}
