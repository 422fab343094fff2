//! Integration tests for criteria persistence across engine sessions

mod common;

use common::*;
use sortable_table::prelude::*;
use tempfile::TempDir;

fn mixed_five() -> CriteriaList {
    CriteriaList::from_criteria(vec![
        criterion("c1", SortField::Status, SortDirection::Ascending),
        criterion("c2", SortField::CreatedAt, SortDirection::Descending),
        criterion("c3", SortField::Name, SortDirection::Ascending),
        criterion("c4", SortField::UpdatedAt, SortDirection::Descending),
        criterion("c5", SortField::Email, SortDirection::Descending),
    ])
    .unwrap()
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_roundtrip_empty() {
    let list = CriteriaList::new();
    let json = list.to_json().unwrap();
    assert_eq!(json, "[]");
    assert_eq!(CriteriaList::from_json(&json).unwrap(), list);
}

#[test]
fn test_roundtrip_single() {
    let list = CriteriaList::from_criteria(vec![SortCriterion::new(SortField::Email)]).unwrap();
    assert_eq!(CriteriaList::from_json(&list.to_json().unwrap()).unwrap(), list);
}

#[test]
fn test_roundtrip_five_mixed() {
    let list = mixed_five();
    let restored = CriteriaList::from_json(&list.to_json().unwrap()).unwrap();
    assert_eq!(restored, list);
    assert_eq!(restored.as_slice()[1].direction, SortDirection::Descending);
}

#[test]
fn test_stored_format() {
    let json = mixed_five().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value.as_array().map(Vec::len), Some(5));
    assert_eq!(
        value[1],
        serde_json::json!({"id": "c2", "field": "createdAt", "direction": "desc"})
    );
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn test_criteria_survive_restart() {
    let store = InMemoryCriteriaStore::new();

    let saved = {
        let mut engine = engine_with(store.clone());
        engine.add_criterion(SortField::Status).unwrap();
        let created = engine.add_criterion(SortField::CreatedAt).unwrap();
        engine.toggle_direction(&created);
        engine.criteria().clone()
    };

    let engine = engine_with(store);
    assert_eq!(engine.criteria(), &saved);
    assert_eq!(engine.sorted_view()[0].name, "George Taylor");
}

#[test]
fn test_restores_legacy_timestamp_ids() {
    let json = r#"[
        {"field":"status","direction":"desc","id":"1708000000000"},
        {"field":"name","direction":"asc","id":"1708000000123"}
    ]"#;
    let store = InMemoryCriteriaStore::with_value(STORAGE_KEY, json);
    let mut engine = engine_with(store);

    assert_eq!(engine.current_criteria().len(), 2);
    assert_eq!(engine.sorted_view()[0].name, "Charlie Brown");

    assert!(engine.toggle_direction(&CriterionId::from("1708000000000")));
    assert_eq!(engine.sorted_view()[0].name, "Alice Smith");
}

#[test]
fn test_malformed_value_falls_back_to_empty() {
    for stored in [
        "not json",
        "{}",
        r#"[{"id":"a","field":"phone","direction":"asc"}]"#,
        r#"[{"id":"a","field":"name"}]"#,
        r#"[{"id":"a","field":"name","direction":"asc"},{"id":"a","field":"email","direction":"asc"}]"#,
    ] {
        let store = InMemoryCriteriaStore::with_value(STORAGE_KEY, stored);
        let engine = engine_with(store.clone());

        assert!(engine.current_criteria().is_empty(), "accepted {}", stored);
        assert_eq!(engine.sorted_view(), sample_clients().as_slice());
        // startup never overwrites what was stored
        assert_eq!(store.load(STORAGE_KEY).unwrap().as_deref(), Some(stored));
    }
}

#[test]
fn test_malformed_value_replaced_on_first_edit() {
    let store = InMemoryCriteriaStore::with_value(STORAGE_KEY, "garbage");
    let mut engine = engine_with(store.clone());
    engine.add_criterion(SortField::Name).unwrap();

    let saved = store.load(STORAGE_KEY).unwrap().unwrap();
    assert_eq!(&CriteriaList::from_json(&saved).unwrap(), engine.criteria());
}

#[test]
fn test_unreadable_store_starts_empty() {
    let engine = SortEngine::new(sample_clients(), FailingStore);
    assert!(engine.current_criteria().is_empty());
}

#[test]
fn test_recording_store_initial_value() {
    let store = RecordingStore::with_initial(mixed_five().to_json().unwrap());
    let engine = SortEngine::new(sample_clients(), store);
    assert_eq!(engine.criteria(), &mixed_five());
    assert_eq!(engine.store().save_count(), 0);
}

// =============================================================================
// File store
// =============================================================================

#[test]
fn test_file_store_across_sessions() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = SortEngine::new(sample_clients(), FileCriteriaStore::new(dir.path()));
        engine.add_criterion(SortField::Name).unwrap();
        engine.add_criterion(SortField::Email).unwrap();
        engine.add_criterion(SortField::Status).unwrap();
        engine.reorder(2, 0).unwrap();
    }

    let engine = SortEngine::new(sample_clients(), FileCriteriaStore::new(dir.path()));
    assert_eq!(
        fields(engine.current_criteria()),
        vec![SortField::Status, SortField::Name, SortField::Email]
    );
    assert!(dir.path().join("sortCriteria.json").exists());
}

#[test]
fn test_file_store_corrupt_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("sortCriteria.json"), "[{").unwrap();

    let engine = SortEngine::new(sample_clients(), FileCriteriaStore::new(dir.path()));
    assert!(engine.current_criteria().is_empty());
}

#[test]
fn test_file_store_with_config_key() {
    let dir = TempDir::new().unwrap();
    let config = EngineConfig::from_yaml_str("storage_key: clients_table\n").unwrap();

    let mut engine = SortEngine::with_config(
        sample_clients(),
        FileCriteriaStore::new(dir.path()),
        config,
    );
    engine.add_criterion(SortField::UpdatedAt).unwrap();

    assert!(dir.path().join("clients_table.json").exists());
    assert!(!dir.path().join("sortCriteria.json").exists());
}
