use chrono::Utc;
use vigil_core::models::HealthSummary;
use vigil_core::signal::*;

fn alert(severity: Severity) -> SignalRecord {
    SignalRecord {
        id: uuid::Uuid::new_v4().to_string(),
        key: "k".to_string(),
        counterpart_key: String::new(),
        target: "srv".to_string(),
        kind: SignalKind::Alert,
        generated_at: Utc::now(),
        severity,
        description: String::new(),
    }
}

#[test]
fn tally_counts_only_warning_and_critical() {
    let records = vec![
        alert(Severity::Warning),
        alert(Severity::Critical),
        alert(Severity::Warning),
        alert(Severity::None),
        alert(Severity::Other("Info".to_string())),
    ];
    let summary = HealthSummary::tally("srv", &records);
    assert_eq!(summary.target, "srv");
    assert_eq!(summary.warnings, 2);
    assert_eq!(summary.criticals, 1);
    assert!(!summary.is_healthy());
}

#[test]
fn tally_of_nothing_is_healthy() {
    let summary = HealthSummary::tally("srv", std::iter::empty());
    assert!(summary.is_healthy());
}

#[test]
fn kind_parses_known_names_only() {
    assert_eq!("Alert".parse::<SignalKind>().unwrap(), SignalKind::Alert);
    assert_eq!("event".parse::<SignalKind>().unwrap(), SignalKind::Event);
    let err = "Incident".parse::<SignalKind>().unwrap_err();
    assert!(err.to_string().contains("Incident"));
}

#[test]
fn only_alerts_are_consolidatable() {
    assert!(SignalKind::Alert.is_consolidatable());
    assert!(!SignalKind::Event.is_consolidatable());
}

#[test]
fn new_signal_deserializes_with_optional_fields_missing() {
    let json = r#"{"target":"srv","key":"psu-lost","kind":"Alert"}"#;
    let signal: NewSignal = serde_json::from_str(json).unwrap();
    assert_eq!(signal.counterpart_key, "");
    assert_eq!(signal.severity, Severity::None);
    assert!(signal.generated_at.is_none());
}
