//! Golden consolidation scenarios from test-fixtures, run through the
//! elimination pass alone and through the full service against a store.

use std::sync::Arc;

use test_fixtures::consolidation_scenarios;
use vigil_consolidation::{eliminate, ConsolidationService, Partition};
use vigil_core::config::ConsolidationConfig;
use vigil_core::traits::ISignalStorage;
use vigil_storage::StorageEngine;

fn survivor_ids(partition: &Partition) -> Vec<String> {
    partition.survivors.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn test_golden_scenarios_are_present() {
    assert!(consolidation_scenarios().len() >= 8);
}

#[test]
fn test_golden_elimination_pass() {
    for (path, scenario) in consolidation_scenarios() {
        let partition = eliminate(&scenario.target, scenario.records_in_store_order())
            .unwrap_or_else(|e| panic!("{path}: {e}"));

        assert_eq!(
            survivor_ids(&partition),
            scenario.expected.survivors,
            "{path}: survivors"
        );
        let eliminated: Vec<String> = partition
            .eliminated_ids()
            .into_iter()
            .map(str::to_string)
            .collect();
        assert_eq!(eliminated, scenario.expected.eliminated, "{path}: eliminated");

        let summary = partition.summary(&scenario.target);
        assert_eq!(summary.warnings, scenario.expected.warnings, "{path}: warnings");
        assert_eq!(summary.criticals, scenario.expected.criticals, "{path}: criticals");
    }
}

#[test]
fn test_golden_scenarios_through_store() {
    for (path, scenario) in consolidation_scenarios() {
        let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
        // Insert in fixture order; the store is responsible for time ordering.
        for record in scenario.records() {
            engine.create(&record).unwrap();
        }
        let service = ConsolidationService::new(
            Arc::clone(&engine) as Arc<dyn ISignalStorage>,
            ConsolidationConfig::default(),
        );

        let summary = service
            .consolidate(&scenario.target)
            .unwrap_or_else(|e| panic!("{path}: {e}"));
        assert_eq!(summary.warnings, scenario.expected.warnings, "{path}: warnings");
        assert_eq!(summary.criticals, scenario.expected.criticals, "{path}: criticals");

        let remaining: Vec<String> = engine
            .list_alerts_ordered_by_time(&scenario.target)
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(remaining, scenario.expected.survivors, "{path}: remaining alerts");

        for id in &scenario.expected.eliminated {
            assert!(engine.get(id).unwrap().is_none(), "{path}: {id} still stored");
        }
    }
}
