//! Forward elimination pass over one target's alert history.
//!
//! Alerts are visited oldest first. The current alert removes every alert
//! still alive after it whose key equals the current alert's counterpart key
//! (a resolution) or its own key (a repeat). An alert that has been removed is
//! never visited as the current alert, and the current alert itself is never
//! removed by anything later. The oldest alert therefore always survives.

use std::fmt;

use serde::Serialize;

use vigil_core::errors::{ConsolidationError, VigilResult};
use vigil_core::models::HealthSummary;
use vigil_core::signal::SignalRecord;

/// Why an alert was eliminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EliminationReason {
    /// Its key matched the earlier alert's counterpart key.
    Counterpart,
    /// Its key matched the earlier alert's key.
    Duplicate,
}

impl EliminationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EliminationReason::Counterpart => "counterpart",
            EliminationReason::Duplicate => "duplicate",
        }
    }
}

impl fmt::Display for EliminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One alert removed by the pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Elimination {
    pub record: SignalRecord,
    /// Id of the earlier alert that removed it.
    pub eliminated_by: String,
    pub reason: EliminationReason,
}

/// Result of one pass: every input alert lands in exactly one side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Partition {
    /// Alerts still outstanding, in input order.
    pub survivors: Vec<SignalRecord>,
    /// Removed alerts, in the order the pass removed them.
    pub eliminated: Vec<Elimination>,
}

impl Partition {
    /// Warning/Critical counts over the survivors.
    pub fn summary(&self, target: &str) -> HealthSummary {
        HealthSummary::tally(target, &self.survivors)
    }

    /// Ids of the eliminated alerts.
    pub fn eliminated_ids(&self) -> Vec<&str> {
        self.eliminated.iter().map(|e| e.record.id.as_str()).collect()
    }

    pub fn is_stable(&self) -> bool {
        self.eliminated.is_empty()
    }
}

/// Validate `alerts` and run the elimination pass.
///
/// `alerts` must all be alerts of `target`, ascending by `generated_at`,
/// with ties already in insertion order.
pub fn eliminate(target: &str, alerts: Vec<SignalRecord>) -> VigilResult<Partition> {
    validate(target, &alerts)?;
    Ok(forward_pass(alerts))
}

/// Reject input that would make the pass compare across targets, touch
/// events, or depend on an order the store did not provide.
pub fn validate(target: &str, alerts: &[SignalRecord]) -> Result<(), ConsolidationError> {
    let mut previous: Option<&SignalRecord> = None;
    for alert in alerts {
        if alert.target != target {
            return Err(ConsolidationError::TargetMismatch {
                expected: target.to_string(),
                found: alert.target.clone(),
            });
        }
        if !alert.is_alert() {
            return Err(ConsolidationError::NotAnAlert {
                id: alert.id.clone(),
            });
        }
        if let Some(prev) = previous {
            if alert.generated_at < prev.generated_at {
                return Err(ConsolidationError::OutOfOrder {
                    id: alert.id.clone(),
                });
            }
        }
        previous = Some(alert);
    }
    Ok(())
}

/// The pass itself, on an alive-marker array instead of a linked list.
fn forward_pass(alerts: Vec<SignalRecord>) -> Partition {
    let n = alerts.len();
    let mut alive = vec![true; n];
    // (victim index, eliminator index, reason) in removal order.
    let mut removed: Vec<(usize, usize, EliminationReason)> = Vec::new();

    for cur in 0..n {
        if !alive[cur] {
            continue;
        }
        let current = &alerts[cur];
        for later in (cur + 1)..n {
            if !alive[later] {
                continue;
            }
            let candidate = &alerts[later];
            if !current.supersedes(candidate) {
                continue;
            }
            // Counterpart wins when both keys match.
            let reason = if candidate.key == current.counterpart_key {
                EliminationReason::Counterpart
            } else {
                EliminationReason::Duplicate
            };
            alive[later] = false;
            removed.push((later, cur, reason));
        }
    }

    let eliminators: Vec<String> = removed
        .iter()
        .map(|&(_, by, _)| alerts[by].id.clone())
        .collect();
    let mut slots: Vec<Option<SignalRecord>> = alerts.into_iter().map(Some).collect();
    let eliminated = removed
        .iter()
        .zip(eliminators)
        .filter_map(|(&(victim, _, reason), eliminated_by)| {
            slots[victim].take().map(|record| Elimination {
                record,
                eliminated_by,
                reason,
            })
        })
        .collect();
    let survivors = slots.into_iter().flatten().collect();

    Partition {
        survivors,
        eliminated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use vigil_core::signal::{Severity, SignalKind};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap()
    }

    fn alert(id: &str, key: &str, counterpart: &str, severity: Severity, at: i64) -> SignalRecord {
        SignalRecord {
            id: id.to_string(),
            key: key.to_string(),
            counterpart_key: counterpart.to_string(),
            target: "T".to_string(),
            kind: SignalKind::Alert,
            generated_at: t0() + Duration::seconds(at),
            severity,
            description: String::new(),
        }
    }

    fn ids(records: &[SignalRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn empty_history_is_empty_partition() {
        let partition = eliminate("T", vec![]).unwrap();
        assert!(partition.survivors.is_empty());
        assert!(partition.is_stable());
        assert!(partition.summary("T").is_healthy());
    }

    #[test]
    fn unrelated_alerts_all_survive() {
        let alerts = vec![
            alert("A1", "k1", "", Severity::Warning, 0),
            alert("A2", "k2", "k1", Severity::Warning, 1),
            alert("A3", "k3", "", Severity::Critical, 2),
        ];
        let partition = eliminate("T", alerts).unwrap();
        assert_eq!(ids(&partition.survivors), vec!["A1", "A2", "A3"]);
        assert!(partition.eliminated.is_empty());
        let summary = partition.summary("T");
        assert_eq!((summary.warnings, summary.criticals), (2, 1));
    }

    #[test]
    fn later_counterpart_is_eliminated() {
        let alerts = vec![
            alert("A1", "k1", "k2", Severity::Critical, 0),
            alert("A2", "k2", "", Severity::None, 1),
        ];
        let partition = eliminate("T", alerts).unwrap();
        assert_eq!(ids(&partition.survivors), vec!["A1"]);
        assert_eq!(partition.eliminated_ids(), vec!["A2"]);
        assert_eq!(partition.eliminated[0].eliminated_by, "A1");
        assert_eq!(partition.eliminated[0].reason, EliminationReason::Counterpart);
    }

    #[test]
    fn later_duplicate_is_eliminated_regardless_of_severity() {
        let alerts = vec![
            alert("A1", "fan", "", Severity::Warning, 0),
            alert("A2", "fan", "", Severity::Critical, 1),
        ];
        let partition = eliminate("T", alerts).unwrap();
        assert_eq!(ids(&partition.survivors), vec!["A1"]);
        assert_eq!(partition.eliminated[0].reason, EliminationReason::Duplicate);
        assert_eq!(partition.summary("T").criticals, 0);
    }

    #[test]
    fn earlier_alert_is_never_eliminated_by_a_later_counterpart() {
        // A2 names A1 as its counterpart, but only earlier alerts eliminate.
        let alerts = vec![
            alert("A1", "down", "", Severity::Critical, 0),
            alert("A2", "up", "down", Severity::None, 1),
        ];
        let partition = eliminate("T", alerts).unwrap();
        assert_eq!(ids(&partition.survivors), vec!["A1", "A2"]);
    }

    #[test]
    fn counterpart_match_wins_over_duplicate_when_both_hold() {
        let alerts = vec![
            alert("A1", "k", "k", Severity::Warning, 0),
            alert("A2", "k", "", Severity::Warning, 1),
        ];
        let partition = eliminate("T", alerts).unwrap();
        assert_eq!(partition.eliminated[0].reason, EliminationReason::Counterpart);
    }

    #[test]
    fn eliminated_alert_does_not_eliminate_others() {
        // A2 is removed by A1, so A2 never gets to remove A3.
        let alerts = vec![
            alert("A1", "k1", "k2", Severity::Warning, 0),
            alert("A2", "k2", "k3", Severity::Warning, 1),
            alert("A3", "k3", "", Severity::Critical, 2),
        ];
        let partition = eliminate("T", alerts).unwrap();
        assert_eq!(ids(&partition.survivors), vec!["A1", "A3"]);
        assert_eq!(partition.eliminated_ids(), vec!["A2"]);
    }

    #[test]
    fn survivor_eliminates_after_earlier_survivors() {
        let alerts = vec![
            alert("A1", "k1", "", Severity::Warning, 0),
            alert("A2", "k2", "k3", Severity::Warning, 1),
            alert("A3", "k1", "", Severity::Warning, 2),
            alert("A4", "k3", "", Severity::Critical, 3),
        ];
        let partition = eliminate("T", alerts).unwrap();
        assert_eq!(ids(&partition.survivors), vec!["A1", "A2"]);
        // A1's scan removes A3 before A2's scan removes A4.
        assert_eq!(partition.eliminated_ids(), vec!["A3", "A4"]);
    }

    #[test]
    fn repeated_keys_collapse_to_oldest() {
        let alerts: Vec<_> = (0..5)
            .map(|i| alert(&format!("A{i}"), "temp", "", Severity::Warning, i))
            .collect();
        let partition = eliminate("T", alerts).unwrap();
        assert_eq!(ids(&partition.survivors), vec!["A0"]);
        assert!(partition.eliminated.iter().all(|e| e.eliminated_by == "A0"));
    }

    #[test]
    fn equal_timestamps_follow_input_order() {
        let alerts = vec![
            alert("first", "k", "", Severity::Warning, 0),
            alert("second", "k", "", Severity::Critical, 0),
        ];
        let partition = eliminate("T", alerts).unwrap();
        assert_eq!(ids(&partition.survivors), vec!["first"]);
    }

    #[test]
    fn empty_counterpart_matches_empty_key() {
        let alerts = vec![
            alert("A1", "k1", "", Severity::Warning, 0),
            alert("A2", "", "", Severity::Warning, 1),
        ];
        let partition = eliminate("T", alerts).unwrap();
        assert_eq!(partition.eliminated_ids(), vec!["A2"]);
    }

    #[test]
    fn second_pass_over_survivors_is_stable() {
        let alerts = vec![
            alert("A1", "k1", "k2", Severity::Warning, 0),
            alert("A2", "k2", "", Severity::Warning, 1),
            alert("A3", "k1", "", Severity::Critical, 2),
            alert("A4", "k4", "", Severity::Critical, 3),
        ];
        let first = eliminate("T", alerts).unwrap();
        let second = eliminate("T", first.survivors.clone()).unwrap();
        assert!(second.is_stable());
        assert_eq!(second.survivors, first.survivors);
    }

    #[test]
    fn rejects_other_targets() {
        let mut stray = alert("A2", "k", "", Severity::Warning, 1);
        stray.target = "U".to_string();
        let err = validate("T", &[alert("A1", "k", "", Severity::Warning, 0), stray]).unwrap_err();
        assert_eq!(
            err,
            ConsolidationError::TargetMismatch {
                expected: "T".to_string(),
                found: "U".to_string()
            }
        );
    }

    #[test]
    fn rejects_events() {
        let mut event = alert("E1", "k", "", Severity::None, 0);
        event.kind = SignalKind::Event;
        assert!(matches!(
            validate("T", &[event]),
            Err(ConsolidationError::NotAnAlert { .. })
        ));
    }

    #[test]
    fn rejects_descending_times() {
        let alerts = vec![
            alert("A1", "k1", "", Severity::Warning, 5),
            alert("A2", "k2", "", Severity::Warning, 1),
        ];
        let err = eliminate("T", alerts).unwrap_err();
        assert!(err.to_string().contains("A2"));
    }

    #[test]
    fn every_elimination_is_a_supersession() {
        let alerts = vec![
            alert("A1", "k", "k", Severity::Warning, 0),
            alert("A2", "k", "", Severity::Warning, 1),
            alert("A3", "j", "k", Severity::Critical, 2),
            alert("A4", "k", "", Severity::Critical, 3),
        ];
        let partition = eliminate("T", alerts.clone()).unwrap();

        assert_eq!(ids(&partition.survivors), vec!["A1", "A3"]);
        for e in &partition.eliminated {
            let by = alerts.iter().find(|a| a.id == e.eliminated_by).unwrap();
            assert!(by.supersedes(&e.record));
            // Both keys match A1, so counterpart takes precedence.
            assert_eq!(e.reason, EliminationReason::Counterpart);
        }
        assert!(!partition.survivors[0].supersedes(&partition.survivors[1]));
    }
}
