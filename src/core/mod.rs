//! Core module containing the fundamental types of the sort engine

pub mod criteria;
pub mod error;
pub mod events;
pub mod field;
pub mod gesture;
pub mod query;
pub mod record;
pub mod store;

pub use criteria::{CriteriaList, CriterionId, SortCriterion, SortDirection};
pub use error::{ConfigError, CriteriaError, SerializationError, StorageError, TableError};
pub use events::{CriteriaEvent, EventBus, EventEnvelope};
pub use field::{FieldValue, SortField, compare_values};
pub use gesture::DragGesture;
pub use query::{compare_records, derive_view, filter_by_search};
pub use record::{ClientRecord, Record, RecordStatus, sample_clients};
pub use store::{QueryableStore, RecordSet};
