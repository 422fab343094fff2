//! Shared fixtures for integration tests
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::*;
//! ```

#![allow(dead_code)]

use std::sync::Mutex;

use sortable_table::prelude::*;

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

/// Store whose every call fails
#[derive(Debug, Default)]
pub struct FailingStore;

impl CriteriaStore for FailingStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable {
            backend: "failing".to_string(),
            message: "storage disabled".to_string(),
        })
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable {
            backend: "failing".to_string(),
            message: "quota exceeded".to_string(),
        })
    }
}

/// Store that records every save, in call order
#[derive(Debug, Default)]
pub struct RecordingStore {
    initial: Option<String>,
    saves: Mutex<Vec<(String, String)>>,
}

impl RecordingStore {
    pub fn with_initial(value: impl Into<String>) -> Self {
        Self {
            initial: Some(value.into()),
            saves: Mutex::new(Vec::new()),
        }
    }

    pub fn saves(&self) -> Vec<(String, String)> {
        self.saves.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    pub fn last_saved(&self) -> Option<CriteriaList> {
        let saves = self.saves.lock().unwrap();
        saves
            .last()
            .map(|(_, json)| CriteriaList::from_json(json).unwrap())
    }
}

impl CriteriaStore for RecordingStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        let saves = self.saves.lock().unwrap();
        Ok(saves
            .last()
            .map(|(_, v)| v.clone())
            .or_else(|| self.initial.clone()))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.saves
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub fn criterion(id: &str, field: SortField, direction: SortDirection) -> SortCriterion {
    SortCriterion {
        id: CriterionId::from(id),
        field,
        direction,
    }
}

pub fn fields(criteria: &[SortCriterion]) -> Vec<SortField> {
    criteria.iter().map(|c| c.field).collect()
}

pub fn ids(view: &[ClientRecord]) -> Vec<&str> {
    view.iter().map(|c| c.id.as_str()).collect()
}

pub fn engine_with(store: InMemoryCriteriaStore) -> SortEngine<InMemoryCriteriaStore> {
    SortEngine::new(sample_clients(), store)
}

/// Criteria `[name, email, status]`, all ascending
pub fn engine_abc() -> SortEngine<InMemoryCriteriaStore> {
    let mut engine = engine_with(InMemoryCriteriaStore::new());
    engine.add_criterion(SortField::Name).unwrap();
    engine.add_criterion(SortField::Email).unwrap();
    engine.add_criterion(SortField::Status).unwrap();
    engine
}

/// A record set where many rows tie on every field except the id
pub fn tied_clients() -> Vec<ClientRecord> {
    let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let statuses = [RecordStatus::Pending, RecordStatus::Active, RecordStatus::Inactive];
    (0..12)
        .map(|i| {
            ClientRecord::new(
                format!("t{}", i),
                if i % 2 == 0 { "Same Name" } else { "Other Name" },
                "shared@example.com",
                date,
                date,
                statuses[i % 3],
            )
        })
        .collect()
}
