//! Typed error handling for the sort engine
//!
//! Each concern gets its own error type so callers can match on the exact
//! failure instead of inspecting an `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`CriteriaError`]: rejected criteria-list edits
//! - [`StorageError`]: failures of a [`CriteriaStore`](crate::storage::CriteriaStore)
//! - [`SerializationError`]: stored criteria that cannot be encoded or decoded
//! - [`ConfigError`]: unreadable or invalid engine configuration
//!
//! None of these are fatal for the engine. Edits that fail leave the criteria
//! list untouched, and persistence failures are logged while the in-memory
//! list stays authoritative.

use crate::core::criteria::CriterionId;
use crate::core::field::SortField;

/// Crate-wide result alias
pub type Result<T, E = TableError> = std::result::Result<T, E>;

/// The umbrella error type
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TableError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            TableError::Criteria(e) => e.error_code(),
            TableError::Storage(e) => e.error_code(),
            TableError::Serialization(_) => "SERIALIZATION_ERROR",
            TableError::Config(_) => "CONFIG_ERROR",
        }
    }
}

// =============================================================================
// Criteria Errors
// =============================================================================

/// Errors related to editing the criteria list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaError {
    /// No criterion carries this id
    #[error("sort criterion '{id}' not found")]
    UnknownId { id: CriterionId },

    /// A reorder index points outside the list
    #[error("index {index} is out of range for {len} sort criteria")]
    IndexOutOfRange { index: usize, len: usize },

    /// The field is already sorted on and duplicates are rejected
    #[error("field '{field}' is already a sort criterion")]
    DuplicateField { field: SortField },
}

impl CriteriaError {
    pub fn error_code(&self) -> &'static str {
        match self {
            CriteriaError::UnknownId { .. } => "CRITERION_NOT_FOUND",
            CriteriaError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            CriteriaError::DuplicateField { .. } => "DUPLICATE_FIELD",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the key-value criteria store
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Backend cannot be reached (e.g. poisoned lock, disabled storage)
    #[error("storage backend '{backend}' is unavailable: {message}")]
    Unavailable { backend: String, message: String },

    /// IO failure while reading or writing
    #[error("storage IO error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Nothing is stored under the key
    #[error("no value stored under key '{key}'")]
    NotFound { key: String },

    /// The key cannot be mapped onto the backend
    #[error("invalid storage key '{key}'")]
    InvalidKey { key: String },
}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Unavailable { .. } => "STORAGE_UNAVAILABLE",
            StorageError::Io { .. } => "STORAGE_IO_ERROR",
            StorageError::NotFound { .. } => "STORAGE_KEY_NOT_FOUND",
            StorageError::InvalidKey { .. } => "STORAGE_INVALID_KEY",
        }
    }
}

// =============================================================================
// Serialization Errors
// =============================================================================

/// Errors while encoding or decoding a stored criteria list
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Not valid JSON, or not the expected shape
    #[error("malformed sort criteria: {0}")]
    Json(#[from] serde_json::Error),

    /// The same id appears twice in the stored list
    #[error("duplicate sort criterion id '{id}'")]
    DuplicateId { id: CriterionId },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error while reading configuration
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
