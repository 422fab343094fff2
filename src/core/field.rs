//! Sortable fields and their comparable values

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A record field that can be used as a sort key
///
/// The serialized names are the ones written to the criteria store, so they
/// must stay stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Email,
    CreatedAt,
    UpdatedAt,
    Status,
}

impl SortField {
    /// Every sortable field, in the order the "add criterion" menu lists them
    pub const ALL: [SortField; 5] = [
        SortField::Name,
        SortField::Email,
        SortField::CreatedAt,
        SortField::UpdatedAt,
        SortField::Status,
    ];

    /// Serialized name (e.g. `createdAt`)
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Email => "email",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
            SortField::Status => "status",
        }
    }

    /// Human-readable column label
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Email => "Email",
            SortField::CreatedAt => "Created At",
            SortField::UpdatedAt => "Updated At",
            SortField::Status => "Status",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`SortField`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for SortField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// The value a record holds for a given [`SortField`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
}

impl FieldValue {
    /// Get the value as a string slice if it is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Date(_) => None,
        }
    }

    /// Get the value as a date if it is one
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// Three-way comparison of two field values
///
/// Text compares lexicographically and dates chronologically. Values of
/// different kinds fall back to comparing their string representations.
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
        (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> FieldValue {
        FieldValue::Date(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
    }

    #[test]
    fn test_field_names_roundtrip() {
        for field in SortField::ALL {
            assert_eq!(field.as_str().parse::<SortField>().unwrap(), field);
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn test_unknown_field() {
        let err = "created_at".parse::<SortField>().unwrap_err();
        assert_eq!(err, UnknownField("created_at".to_string()));
        assert!(serde_json::from_str::<SortField>("\"id\"").is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(SortField::CreatedAt.label(), "Created At");
        assert_eq!(SortField::Status.label(), "Status");
    }

    #[test]
    fn test_compare_text() {
        let a = FieldValue::Text("Alice".to_string());
        let b = FieldValue::Text("Bob".to_string());
        assert_eq!(compare_values(&a, &b), Ordering::Less);
        assert_eq!(compare_values(&b, &a), Ordering::Greater);
        assert_eq!(compare_values(&a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_compare_text_is_case_sensitive() {
        // Uppercase sorts before lowercase, as a plain `<` on strings does
        let upper = FieldValue::Text("Zed".to_string());
        let lower = FieldValue::Text("adam".to_string());
        assert_eq!(compare_values(&upper, &lower), Ordering::Less);
    }

    #[test]
    fn test_compare_dates() {
        assert_eq!(
            compare_values(&date("2023-12-01"), &date("2024-01-20")),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&date("2024-03-01"), &date("2024-03-01")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_mixed_uses_string_form() {
        let text = FieldValue::Text("2024-01-01".to_string());
        assert_eq!(compare_values(&text, &date("2024-01-01")), Ordering::Equal);
        assert_eq!(compare_values(&text, &date("2023-06-30")), Ordering::Greater);
    }

    #[test]
    fn test_display_iso_date() {
        assert_eq!(date("2024-02-05").to_string(), "2024-02-05");
        assert_eq!(date("2024-02-05").as_text(), None);
        assert!(date("2024-02-05").as_date().is_some());
    }
}
