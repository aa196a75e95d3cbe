//! Test fixture loader for Vigil golden consolidation scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! turning a scenario into signal records in tests across crates.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use vigil_core::signal::{Severity, SignalKind, SignalRecord};

/// This crate's directory; fixture paths are relative to it.
fn fixtures_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Absolute path of a fixture.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Read and deserialize a JSON fixture.
///
/// # Panics
/// When the file is missing or does not match `T`.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("cannot parse fixture {}: {e}", path.display()))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).is_file()
}

/// JSON files directly under `subdir`, sorted by name. Empty if `subdir` is missing.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(fixture_path(subdir)) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// All golden consolidation scenarios, by fixture-relative path.
pub fn consolidation_scenarios() -> Vec<(String, ConsolidationScenario)> {
    list_fixtures("golden/consolidation")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let relative = format!("golden/consolidation/{name}");
            let scenario = load_fixture(&relative);
            (relative, scenario)
        })
        .collect()
}

/// One alert in a scenario; time is an offset from the scenario epoch.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioAlert {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub counterpart_key: String,
    pub severity: Severity,
    pub at_secs: i64,
}

/// What consolidating the scenario must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioExpectation {
    pub survivors: Vec<String>,
    /// In elimination order.
    pub eliminated: Vec<String>,
    pub warnings: usize,
    pub criticals: usize,
}

/// A golden consolidation scenario for a single target.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsolidationScenario {
    pub name: String,
    pub description: String,
    pub target: String,
    /// Listed in insertion order; not necessarily sorted by time.
    pub alerts: Vec<ScenarioAlert>,
    pub expected: ScenarioExpectation,
}

impl ConsolidationScenario {
    /// The epoch that `at_secs` offsets are relative to.
    pub fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }

    /// The scenario's alerts as records, in insertion order.
    pub fn records(&self) -> Vec<SignalRecord> {
        self.alerts
            .iter()
            .map(|a| SignalRecord {
                id: a.id.clone(),
                key: a.key.clone(),
                counterpart_key: a.counterpart_key.clone(),
                target: self.target.clone(),
                kind: SignalKind::Alert,
                generated_at: Self::epoch() + Duration::seconds(a.at_secs),
                severity: a.severity.clone(),
                description: format!("{} ({})", a.key, self.name),
            })
            .collect()
    }

    /// Records sorted the way the store lists them: time, then insertion.
    pub fn records_in_store_order(&self) -> Vec<SignalRecord> {
        let mut records = self.records();
        records.sort_by_key(|r| r.generated_at);
        records
    }
}
