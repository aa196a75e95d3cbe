use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::kind::SignalKind;
use super::severity::Severity;

/// One observed condition about a monitored target. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRecord {
    /// UUID v4 identifier, assigned at creation and never reused.
    pub id: String,
    /// Identifies this condition instance.
    pub key: String,
    /// Identifies the condition this record resolves or pairs with. May be empty.
    pub counterpart_key: String,
    /// The monitored resource this record concerns.
    pub target: String,
    pub kind: SignalKind,
    /// Position in the consolidation order.
    pub generated_at: DateTime<Utc>,
    pub severity: Severity,
    /// Free text, opaque to consolidation.
    pub description: String,
}

/// A request from the ingestion layer to persist one signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSignal {
    pub target: String,
    pub key: String,
    #[serde(default)]
    pub counterpart_key: String,
    pub kind: SignalKind,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub description: String,
    /// Generation time reported by the source. `None` means "now".
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

impl SignalRecord {
    /// Build a record from an ingestion request, assigning a fresh id and,
    /// when the source did not report one, the current time.
    pub fn from_new(signal: NewSignal) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            key: signal.key,
            counterpart_key: signal.counterpart_key,
            target: signal.target,
            kind: signal.kind,
            generated_at: signal.generated_at.unwrap_or_else(Utc::now),
            severity: signal.severity,
            description: signal.description,
        }
    }

    pub fn is_alert(&self) -> bool {
        self.kind == SignalKind::Alert
    }

    /// Whether `later` is the resolution of this record or a repeat of it.
    pub fn supersedes(&self, later: &SignalRecord) -> bool {
        later.key == self.counterpart_key || later.key == self.key
    }
}
