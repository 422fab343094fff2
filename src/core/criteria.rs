//! Sort criteria and the ordered list that holds them
//!
//! A [`CriteriaList`] is the priority-ordered set of sort keys: index 0 is the
//! primary key, index 1 breaks its ties, and so on. The list itself does no
//! I/O; persistence and view recomputation are sequenced by the engine.

use crate::core::error::{CriteriaError, SerializationError};
use crate::core::field::SortField;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Direction applied to one sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply this direction to an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identity of a criterion, generated when it is added
///
/// Stored lists may carry ids in any string form, so this wraps a plain
/// `String` rather than a `Uuid`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriterionId(String);

impl CriterionId {
    /// Generate a fresh, unique id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CriterionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CriterionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One tier of a multi-key sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriterion {
    pub id: CriterionId,
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortCriterion {
    /// Create an ascending criterion with a fresh id
    pub fn new(field: SortField) -> Self {
        Self {
            id: CriterionId::generate(),
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Builder-style direction override
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// Priority-ordered list of sort criteria
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CriteriaList {
    items: Vec<SortCriterion>,
}

impl CriteriaList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from existing criteria
    ///
    /// Fails if two criteria share an id.
    pub fn from_criteria(items: Vec<SortCriterion>) -> Result<Self, SerializationError> {
        let mut seen = HashSet::with_capacity(items.len());
        for criterion in &items {
            if !seen.insert(&criterion.id) {
                return Err(SerializationError::DuplicateId {
                    id: criterion.id.clone(),
                });
            }
        }
        Ok(Self { items })
    }

    /// Append an ascending criterion for `field`
    pub fn push(&mut self, field: SortField) -> &SortCriterion {
        self.items.push(SortCriterion::new(field));
        let last = self.items.len() - 1;
        &self.items[last]
    }

    /// Flip the direction of the criterion with this id
    ///
    /// Returns the updated criterion, or `None` if the id is unknown.
    pub fn toggle(&mut self, id: &CriterionId) -> Option<&SortCriterion> {
        let criterion = self.items.iter_mut().find(|c| &c.id == id)?;
        criterion.direction = criterion.direction.toggled();
        Some(criterion)
    }

    /// Remove the criterion with this id, keeping the order of the rest
    pub fn remove(&mut self, id: &CriterionId) -> Option<SortCriterion> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Move the criterion at `from` so it ends up at `to`
    ///
    /// Elements in between shift by one. This is a move, not a swap.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), CriteriaError> {
        let len = self.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(CriteriaError::IndexOutOfRange { index, len });
            }
        }
        if from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
        }
        Ok(())
    }

    pub fn position(&self, id: &CriterionId) -> Option<usize> {
        self.items.iter().position(|c| &c.id == id)
    }

    pub fn get(&self, id: &CriterionId) -> Option<&SortCriterion> {
        self.items.iter().find(|c| &c.id == id)
    }

    pub fn contains_field(&self, field: SortField) -> bool {
        self.items.iter().any(|c| c.field == field)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortCriterion> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[SortCriterion] {
        &self.items
    }

    /// Serialize to the stored JSON form
    pub fn to_json(&self) -> Result<String, SerializationError> {
        Ok(serde_json::to_string(&self.items)?)
    }

    /// Parse the stored JSON form
    pub fn from_json(json: &str) -> Result<Self, SerializationError> {
        let items: Vec<SortCriterion> = serde_json::from_str(json)?;
        Self::from_criteria(items)
    }
}

impl<'a> IntoIterator for &'a CriteriaList {
    type Item = &'a SortCriterion;
    type IntoIter = std::slice::Iter<'a, SortCriterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'de> Deserialize<'de> for CriteriaList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<SortCriterion>::deserialize(deserializer)?;
        CriteriaList::from_criteria(items).map_err(serde::de::Error::custom)
    }
}
