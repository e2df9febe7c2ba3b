//! Schema-less document model.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single field value. Only the types the landing service writes are
/// modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// UTF-8 text.
    String(String),
    /// A point in time, always UTC.
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// Borrow the text if this is a string field.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Timestamp(_) => None,
        }
    }

    /// Return the timestamp if this is a timestamp field.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(ts) => Some(*ts),
            Self::String(_) => None,
        }
    }
}

/// An ordered map of field name to value.
///
/// # Examples
///
/// ```
/// # use saathi_store::{Document, FieldValue};
/// let doc = Document::new().with_string("source", "landing-page");
/// assert_eq!(doc.get("source").and_then(FieldValue::as_str), Some("landing-page"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    fields: BTreeMap<String, FieldValue>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a string field, replacing any previous value.
    #[must_use]
    pub fn with_string(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(name.to_owned(), FieldValue::String(value.into()));
        self
    }

    /// Set a timestamp field, replacing any previous value.
    #[must_use]
    pub fn with_timestamp(mut self, name: &str, value: DateTime<Utc>) -> Self {
        self.fields
            .insert(name.to_owned(), FieldValue::Timestamp(value));
        self
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Iterate over fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Identifier assigned by the store to an inserted document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Wrap a store-assigned identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_replaces_existing_field() {
        let doc = Document::new()
            .with_string("email", "a@b.co")
            .with_string("email", "c@d.co");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("email").and_then(FieldValue::as_str), Some("c@d.co"));
    }

    #[test]
    fn fields_iterate_in_name_order() {
        let now = Utc::now();
        let doc = Document::new()
            .with_timestamp("timestamp", now)
            .with_string("source", "landing-page")
            .with_string("email", "a@b.co");
        let names: Vec<&str> = doc.fields().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["email", "source", "timestamp"]);
    }

    #[test]
    fn accessors_reject_wrong_type() {
        let now = Utc::now();
        assert_eq!(FieldValue::Timestamp(now).as_str(), None);
        assert_eq!(FieldValue::String("x".to_owned()).as_timestamp(), None);
        assert_eq!(FieldValue::Timestamp(now).as_timestamp(), Some(now));
    }
}
