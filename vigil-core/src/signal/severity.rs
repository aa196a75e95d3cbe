use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity attached to a signal.
///
/// Only `Warning` and `Critical` are counted in a health summary. Unknown
/// severities are kept verbatim in `Other` so they survive a round trip
/// through the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    #[default]
    None,
    Warning,
    Critical,
    Other(String),
}

impl Severity {
    /// Parse a severity name. Known names match case-insensitively.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("none") || s.is_empty() {
            Severity::None
        } else if s.eq_ignore_ascii_case("warning") {
            Severity::Warning
        } else if s.eq_ignore_ascii_case("critical") {
            Severity::Critical
        } else {
            Severity::Other(s.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Severity::None => "None",
            Severity::Warning => "Warning",
            Severity::Critical => "Critical",
            Severity::Other(s) => s,
        }
    }

    /// True for the severities that contribute to a health summary.
    pub fn is_counted(&self) -> bool {
        matches!(self, Severity::Warning | Severity::Critical)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        Severity::parse(&s)
    }
}

impl From<&str> for Severity {
    fn from(s: &str) -> Self {
        Severity::parse(s)
    }
}

impl From<Severity> for String {
    fn from(s: Severity) -> Self {
        s.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_parse_case_insensitively() {
        assert_eq!(Severity::parse("warning"), Severity::Warning);
        assert_eq!(Severity::parse("CRITICAL"), Severity::Critical);
        assert_eq!(Severity::parse("None"), Severity::None);
        assert_eq!(Severity::parse(""), Severity::None);
    }

    #[test]
    fn unknown_names_are_preserved() {
        let sev = Severity::parse("Major");
        assert_eq!(sev, Severity::Other("Major".to_string()));
        assert_eq!(sev.as_str(), "Major");
        assert!(!sev.is_counted());
    }

    #[test]
    fn serde_uses_plain_strings() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"Critical\"");
        let back: Severity = serde_json::from_str("\"Info\"").unwrap();
        assert_eq!(back, Severity::Other("Info".to_string()));
    }
}
