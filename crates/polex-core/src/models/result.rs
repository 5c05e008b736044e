//! Per-field and per-run result records.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::metadata::RunMetadata;

/// One of the two input documents a field value may come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// The email body.
    Email,
    /// The attached document body.
    Document,
}

impl Source {
    /// The source tried when this one yields nothing.
    pub fn other(self) -> Self {
        match self {
            Self::Email => Self::Document,
            Self::Document => Self::Email,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single extracted value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Numeric fields with separators and currency symbols stripped.
    Integer(u64),
    /// Identifier-like fields, kept as captured (lowercase).
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Text(s) => f.pad(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        Self::Integer(n)
    }
}

/// Why a field carries no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReason {
    /// A required field was not found in either source.
    RequiredFieldMissing,
    /// An optional field was not found in either source.
    NotFound,
}

impl MissingReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RequiredFieldMissing => "required_field_missing",
            Self::NotFound => "not_found",
        }
    }
}

/// Full result record for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrappedField {
    /// Extracted value, `null` when nothing unambiguous was found.
    pub value: Option<FieldValue>,

    /// Source that supplied the value.
    pub source: Option<Source>,

    /// Confidence score (0.0 - 1.0), rounded to two decimals.
    pub confidence: f64,

    /// Whether the field table marks this field as required.
    pub required: bool,

    /// Failure reason, absent when a value was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<MissingReason>,
}

impl WrappedField {
    pub fn is_found(&self) -> bool {
        self.value.is_some()
    }
}

/// Result of one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Run metadata, passed through unchanged.
    pub metadata: RunMetadata,

    /// One entry per configured field, in field-table order.
    pub fields: IndexMap<String, WrappedField>,
}

impl PipelineResult {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&WrappedField> {
        self.fields.get(name)
    }

    /// Names of required fields that carry no value.
    pub fn missing_required(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, f)| f.required && !f.is_found())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Number of fields that carry a value.
    pub fn found_count(&self) -> usize {
        self.fields.values().filter(|f| f.is_found()).count()
    }
}
