//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::storage::STORAGE_KEY;
use serde::{Deserialize, Serialize};

/// What to do when a field that is already sorted on is added again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateFieldPolicy {
    /// Append it anyway; the later criterion only breaks ties the earlier
    /// one already left, so it never changes the order
    #[default]
    Allow,
    /// Refuse with `CriteriaError::DuplicateField`
    Reject,
}

/// Engine configuration
///
/// Every field has a default, so a document may set only what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Key the criteria list is persisted under
    pub storage_key: String,

    /// Policy for adding a field that is already a criterion
    pub duplicate_fields: DuplicateFieldPolicy,

    /// Events buffered per subscriber before it starts lagging
    pub event_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            duplicate_fields: DuplicateFieldPolicy::Allow,
            event_capacity: 64,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        self.event_capacity = self.event_capacity.max(1);
        if self.storage_key.is_empty() {
            self.storage_key = STORAGE_KEY.to_string();
        }
        self
    }
}
