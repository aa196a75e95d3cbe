use vigil_core::errors::*;

#[test]
fn storage_error_converts_to_vigil_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk full".into(),
    };
    let err: VigilError = storage_err.into();
    assert!(matches!(err, VigilError::StorageError(_)));
    assert!(err.is_store_failure());
}

#[test]
fn consolidation_error_converts_to_vigil_error() {
    let cons_err = ConsolidationError::TargetMismatch {
        expected: "srv-a".into(),
        found: "srv-b".into(),
    };
    let err: VigilError = cons_err.into();
    assert!(matches!(err, VigilError::ConsolidationError(_)));
    assert!(!err.is_store_failure());
}

#[test]
fn serialization_error_converts_to_vigil_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: VigilError = json_err.into();
    assert!(matches!(err, VigilError::SerializationError(_)));
}

#[test]
fn deletion_failed_carries_id_and_reason() {
    let err = ConsolidationError::DeletionFailed {
        id: "alert-9".into(),
        reason: "database is locked".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("alert-9"));
    assert!(msg.contains("database is locked"));
}

#[test]
fn migration_failed_carries_version() {
    let err = StorageError::MigrationFailed {
        version: 2,
        reason: "syntax error".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains('2'));
    assert!(msg.contains("syntax error"));
}

#[test]
fn unavailable_store_carries_reason() {
    let err = StorageError::Unavailable {
        reason: "writer lock poisoned".into(),
    };
    assert!(err.to_string().contains("writer lock poisoned"));
}
