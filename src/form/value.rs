use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field values keyed by field name.
pub type Fields = BTreeMap<String, FieldValue>;

/// Field-level error messages keyed by field name.
///
/// Messages are opaque display strings; nothing in the wizard interprets them.
pub type FieldErrors = BTreeMap<String, String>;

/// Value held by a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn empty_text() -> Self {
        Self::Text(String::new())
    }

    pub fn empty_list() -> Self {
        Self::List(Vec::new())
    }

    /// True when the value counts as "not entered" for gate predicates.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            Self::Text(_) => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::empty_text()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}
