use serde::{Deserialize, Serialize};

use crate::signal::{Severity, SignalRecord};

/// Outstanding Warning/Critical counts for one target after consolidation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSummary {
    pub target: String,
    pub warnings: usize,
    pub criticals: usize,
}

impl HealthSummary {
    /// Count the surviving alerts of a target by severity.
    pub fn tally<'a, I>(target: &str, survivors: I) -> Self
    where
        I: IntoIterator<Item = &'a SignalRecord>,
    {
        let mut summary = Self {
            target: target.to_string(),
            ..Self::default()
        };
        for record in survivors {
            match record.severity {
                Severity::Warning => summary.warnings += 1,
                Severity::Critical => summary.criticals += 1,
                _ => {}
            }
        }
        summary
    }

    /// True when the target has nothing outstanding.
    pub fn is_healthy(&self) -> bool {
        self.warnings == 0 && self.criticals == 0
    }
}
