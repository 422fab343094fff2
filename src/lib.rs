//! # sortable-table
//!
//! The logic behind a searchable client table whose rows are ordered by a
//! user-edited list of sort criteria.
//!
//! ## Features
//!
//! - **Multi-Key Sorting**: criteria apply in priority order, first difference wins
//! - **Stable & Idempotent**: ties keep their input order, re-sorting changes nothing
//! - **Editable Criteria**: add, toggle direction, remove, drag to reorder
//! - **Pluggable Persistence**: criteria saved after every edit via [`storage::CriteriaStore`]
//! - **Free-Text Search**: case-insensitive substring match across every field
//! - **Change Notifications**: one [`core::CriteriaEvent`] per successful edit
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sortable_table::prelude::*;
//!
//! let store = FileCriteriaStore::new("./state");
//! let mut engine = SortEngine::new(sample_clients(), store);
//!
//! engine.add_criterion(SortField::Status)?;
//! let created = engine.add_criterion(SortField::CreatedAt)?;
//! engine.toggle_direction(&created);
//!
//! // Drag the second criterion to the top
//! engine.drag_start(1);
//! engine.drag_enter(0);
//! engine.drag_end()?;
//!
//! let rows = engine.current_view("alice");
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        criteria::{CriteriaList, CriterionId, SortCriterion, SortDirection},
        events::{CriteriaEvent, EventBus, EventEnvelope},
        field::{FieldValue, SortField},
        gesture::DragGesture,
        record::{ClientRecord, Record, RecordStatus, sample_clients},
        store::{QueryableStore, RecordSet},
    };

    // === Errors ===
    pub use crate::core::error::{
        ConfigError, CriteriaError, SerializationError, StorageError, TableError,
    };

    // === Engine ===
    pub use crate::engine::SortEngine;

    // === Storage ===
    pub use crate::storage::{
        CriteriaStore, FileCriteriaStore, InMemoryCriteriaStore, STORAGE_KEY,
    };

    // === Config ===
    pub use crate::config::{DuplicateFieldPolicy, EngineConfig};
}
