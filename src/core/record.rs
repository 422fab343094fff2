//! Record traits and the client record type shown in the table

use crate::core::field::{FieldValue, SortField};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base trait for rows the engine can sort and search.
///
/// Records are read-only from the engine's point of view: it only reorders
/// and filters a view over them.
pub trait Record: Clone + Send + Sync + 'static {
    /// Unique identifier of this record
    fn id(&self) -> &str;

    /// Get the value of a sortable field
    fn field_value(&self, field: SortField) -> FieldValue;

    /// String representations of every field, used for free-text search
    ///
    /// The default covers the id and every sortable field.
    fn search_values(&self) -> Vec<String> {
        std::iter::once(self.id().to_string())
            .chain(
                SortField::ALL
                    .into_iter()
                    .map(|field| self.field_value(field).to_string()),
            )
            .collect()
    }
}

/// Lifecycle status of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Inactive,
    Pending,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Inactive => "inactive",
            RecordStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A client row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub status: RecordStatus,
}

impl ClientRecord {
    /// Create a new client record
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: NaiveDate,
        updated_at: NaiveDate,
        status: RecordStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            created_at,
            updated_at,
            status,
        }
    }
}

impl Record for ClientRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: SortField) -> FieldValue {
        match field {
            SortField::Name => FieldValue::Text(self.name.clone()),
            SortField::Email => FieldValue::Text(self.email.clone()),
            SortField::CreatedAt => FieldValue::Date(self.created_at),
            SortField::UpdatedAt => FieldValue::Date(self.updated_at),
            SortField::Status => FieldValue::Text(self.status.as_str().to_string()),
        }
    }
}

/// The ten-client sample set the table starts with
pub fn sample_clients() -> Vec<ClientRecord> {
    use RecordStatus::{Active, Inactive, Pending};

    const ROWS: [(&str, &str, &str, &str, &str, RecordStatus); 10] = [
        ("1", "Alice Smith", "alice.smith@example.com", "2024-01-20", "2024-02-15", Active),
        ("2", "Bob Johnson", "bob.johnson@example.com", "2023-11-01", "2024-02-20", Inactive),
        ("3", "Charlie Brown", "charlie.brown@example.com", "2024-02-01", "2024-02-22", Pending),
        ("4", "Diana Miller", "diana.miller@example.com", "2023-10-15", "2024-02-25", Active),
        ("5", "Ethan Davis", "ethan.davis@example.com", "2024-01-01", "2024-02-28", Inactive),
        ("6", "Fiona Wilson", "fiona.wilson@example.com", "2023-09-20", "2024-03-01", Pending),
        ("7", "George Taylor", "george.taylor@example.com", "2024-02-10", "2024-03-05", Active),
        ("8", "Hannah Moore", "hannah.moore@example.com", "2023-12-01", "2024-03-10", Inactive),
        ("9", "Ian White", "ian.white@example.com", "2024-03-01", "2024-03-12", Pending),
        ("10", "Jack Hill", "jack.hill@example.com", "2023-08-15", "2024-03-15", Active),
    ];

    ROWS.iter()
        .filter_map(|&(id, name, email, created, updated, status)| {
            let created_at = created.parse().ok()?;
            let updated_at = updated.parse().ok()?;
            Some(ClientRecord::new(id, name, email, created_at, updated_at, status))
        })
        .collect()
}
