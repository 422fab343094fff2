//! The sort-criteria engine behind the client table
//!
//! [`SortEngine`] owns the ordered criteria list, the fixed record collection
//! and the current search term, and turns presentation intents (add a field,
//! toggle a direction, remove, drag to reorder, type a search) into a derived
//! view.
//!
//! Every successful edit runs the same fixed sequence:
//!
//! 1. update the in-memory criteria list
//! 2. save it through the injected [`CriteriaStore`]
//! 3. recompute the sorted view from the canonical records
//! 4. publish a [`CriteriaEvent`]
//!
//! Edits that reference an unknown criterion or an out-of-range index change
//! nothing, save nothing and publish nothing.
//!
//! # Example
//!
//! ```rust,ignore
//! use sortable_table::prelude::*;
//!
//! let mut engine = SortEngine::new(sample_clients(), InMemoryCriteriaStore::new());
//! engine.add_criterion(SortField::Status)?;
//! let created = engine.add_criterion(SortField::CreatedAt)?;
//! engine.toggle_direction(&created);
//!
//! for client in engine.current_view("example.com") {
//!     println!("{} {}", client.status, client.name);
//! }
//! ```

use crate::config::{DuplicateFieldPolicy, EngineConfig};
use crate::core::criteria::{CriteriaList, CriterionId, SortCriterion, SortDirection};
use crate::core::error::{CriteriaError, Result, StorageError};
use crate::core::events::{CriteriaEvent, EventBus, EventEnvelope};
use crate::core::field::SortField;
use crate::core::gesture::DragGesture;
use crate::core::record::{ClientRecord, Record};
use crate::core::store::{QueryableStore, RecordSet};
use crate::storage::CriteriaStore;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Multi-key sort engine with persisted, reorderable criteria
pub struct SortEngine<S, R = ClientRecord> {
    records: RecordSet<R>,
    criteria: CriteriaList,
    view: Vec<R>,
    search_term: String,
    gesture: DragGesture,
    store: S,
    events: EventBus,
    config: EngineConfig,
}

impl<S, R> SortEngine<S, R>
where
    S: CriteriaStore,
    R: Record,
{
    /// Build an engine with the default configuration
    pub fn new(records: Vec<R>, store: S) -> Self {
        Self::with_config(records, store, EngineConfig::default())
    }

    /// Build an engine, restoring criteria from `store`
    ///
    /// A missing, unreadable or malformed stored value starts the engine with
    /// no criteria. Nothing is written back at startup.
    pub fn with_config(records: Vec<R>, store: S, config: EngineConfig) -> Self {
        let records = RecordSet::new(records);
        let criteria = load_criteria(&store, &config.storage_key);
        let view = records.apply_sort(records.list_all(), criteria.as_slice());

        Self {
            records,
            criteria,
            view,
            search_term: String::new(),
            gesture: DragGesture::default(),
            store,
            events: EventBus::new(config.event_capacity),
            config,
        }
    }

    // === Intents ===

    /// Append an ascending criterion on `field`
    ///
    /// Always succeeds under [`DuplicateFieldPolicy::Allow`]. Under
    /// [`DuplicateFieldPolicy::Reject`] a field that is already present is
    /// refused and nothing changes.
    pub fn add_criterion(&mut self, field: SortField) -> Result<CriterionId, CriteriaError> {
        if self.config.duplicate_fields == DuplicateFieldPolicy::Reject
            && self.criteria.contains_field(field)
        {
            debug!(field = %field, "duplicate sort field rejected");
            return Err(CriteriaError::DuplicateField { field });
        }

        let id = self.criteria.push(field).id.clone();
        debug!(criterion_id = %id, field = %field, "sort criterion added");

        self.commit(CriteriaEvent::Added {
            id: id.clone(),
            field,
        });
        Ok(id)
    }

    /// Flip the direction of a criterion, keeping its position
    ///
    /// Returns `false` (and does nothing) if the id is unknown.
    pub fn toggle_direction(&mut self, id: &CriterionId) -> bool {
        self.try_toggle_direction(id).is_ok()
    }

    /// Flip the direction of a criterion, reporting an unknown id
    pub fn try_toggle_direction(
        &mut self,
        id: &CriterionId,
    ) -> Result<SortDirection, CriteriaError> {
        let Some(criterion) = self.criteria.toggle(id) else {
            debug!(criterion_id = %id, "toggle ignored, unknown criterion");
            return Err(CriteriaError::UnknownId { id: id.clone() });
        };
        let (field, direction) = (criterion.field, criterion.direction);
        debug!(
            criterion_id = %id,
            field = %field,
            direction = %direction,
            "sort direction toggled"
        );

        self.commit(CriteriaEvent::Toggled {
            id: id.clone(),
            field,
            direction,
        });
        Ok(direction)
    }

    /// Remove a criterion, keeping the order of the others
    ///
    /// Returns `false` (and does nothing) if the id is unknown.
    pub fn remove_criterion(&mut self, id: &CriterionId) -> bool {
        self.try_remove_criterion(id).is_ok()
    }

    /// Remove a criterion, reporting an unknown id
    pub fn try_remove_criterion(
        &mut self,
        id: &CriterionId,
    ) -> Result<SortCriterion, CriteriaError> {
        let Some(removed) = self.criteria.remove(id) else {
            debug!(criterion_id = %id, "remove ignored, unknown criterion");
            return Err(CriteriaError::UnknownId { id: id.clone() });
        };
        debug!(criterion_id = %id, field = %removed.field, "sort criterion removed");

        self.commit(CriteriaEvent::Removed {
            id: removed.id.clone(),
            field: removed.field,
        });
        Ok(removed)
    }

    /// Move the criterion at `from` to `to`, shifting the ones in between
    ///
    /// Out-of-range indices leave the list as it was. Moving an item onto
    /// its own position succeeds without saving anything.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), CriteriaError> {
        if let Err(e) = self.criteria.move_item(from, to) {
            debug!(from, to, error = %e, "reorder ignored");
            return Err(e);
        }
        if from == to {
            return Ok(());
        }
        debug!(from, to, "sort criteria reordered");

        self.commit(CriteriaEvent::Reordered { from, to });
        Ok(())
    }

    /// Set the search term applied by [`visible`](Self::visible)
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Re-read the criteria list from the store
    ///
    /// Unlike startup, any load failure (including a missing value) is
    /// reported and the current list is kept. Nothing is saved and no event
    /// is published. Returns the number of criteria loaded.
    pub fn reload(&mut self) -> Result<usize> {
        let key = self.config.storage_key.as_str();
        let Some(json) = self.store.load(key)? else {
            return Err(StorageError::NotFound {
                key: key.to_string(),
            }
            .into());
        };
        self.criteria = CriteriaList::from_json(&json)?;
        self.view = self.derive_view();
        info!(key, count = self.criteria.len(), "sort criteria reloaded");
        Ok(self.criteria.len())
    }

    // === Drag gesture ===

    /// A drag started on the criterion at `index`
    pub fn drag_start(&mut self, index: usize) {
        self.gesture.start(index);
    }

    /// The drag is hovering the criterion at `index`
    pub fn drag_enter(&mut self, index: usize) {
        self.gesture.hover(index);
    }

    /// The drag ended; commit the move to the last hovered row
    ///
    /// Returns whether the criteria list changed.
    pub fn drag_end(&mut self) -> Result<bool, CriteriaError> {
        match self.gesture.finish() {
            Some((from, to)) => self.reorder(from, to).map(|()| from != to),
            None => Ok(false),
        }
    }

    /// The drag was abandoned
    pub fn drag_cancel(&mut self) {
        self.gesture.cancel();
    }

    /// Index of the criterion being dragged, if any
    pub fn dragging_index(&self) -> Option<usize> {
        self.gesture.source()
    }

    // === Queries ===

    /// Criteria in priority order
    pub fn current_criteria(&self) -> &[SortCriterion] {
        self.criteria.as_slice()
    }

    pub fn criteria(&self) -> &CriteriaList {
        &self.criteria
    }

    /// Freshly sort the canonical records under the current criteria
    pub fn derive_view(&self) -> Vec<R> {
        self.records
            .apply_sort(self.records.list_all(), self.criteria.as_slice())
    }

    /// The sorted, unfiltered view as of the last edit
    pub fn sorted_view(&self) -> &[R] {
        &self.view
    }

    /// The sorted view narrowed to records matching `term`
    pub fn current_view(&self, term: &str) -> Vec<R> {
        self.records.apply_filters(self.view.clone(), term)
    }

    /// The sorted view narrowed by the stored search term
    pub fn visible(&self) -> Vec<R> {
        self.current_view(&self.search_term)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Whether nothing matches `term`
    pub fn is_empty_view(&self, term: &str) -> bool {
        self.current_view(term).is_empty()
    }

    /// The canonical, unsorted records
    pub fn records(&self) -> &RecordSet<R> {
        &self.records
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Receive an event for every future successful edit
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.events.subscribe()
    }

    // === Internals ===

    fn commit(&mut self, event: CriteriaEvent) {
        self.persist();
        self.view = self.derive_view();
        self.events.publish(event);
    }

    fn persist(&self) {
        let key = self.config.storage_key.as_str();
        let json = match self.criteria.to_json() {
            Ok(json) => json,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize sort criteria");
                return;
            }
        };
        if let Err(e) = self.store.save(key, &json) {
            warn!(key, error = %e, "failed to persist sort criteria");
        }
    }
}

fn load_criteria<S: CriteriaStore>(store: &S, key: &str) -> CriteriaList {
    let criteria = match store.load(key) {
        Ok(Some(json)) => match CriteriaList::from_json(&json) {
            Ok(criteria) => criteria,
            Err(e) => {
                warn!(key, error = %e, "discarding malformed sort criteria");
                CriteriaList::new()
            }
        },
        Ok(None) => CriteriaList::new(),
        Err(e) => {
            warn!(key, error = %e, "failed to load sort criteria");
            CriteriaList::new()
        }
    };
    info!(key, count = criteria.len(), "sort criteria loaded");
    criteria
}
