//! Policy number extraction.

use regex::Regex;

use super::patterns::POLICY_NUMBER;
use crate::extraction::FieldExtractor;
use crate::models::result::FieldValue;

/// Policy number extractor. Values are alphanumeric/hyphen tokens kept as text.
pub struct PolicyNumberExtractor;

impl PolicyNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PolicyNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PolicyNumberExtractor {
    fn pattern(&self) -> &Regex {
        &POLICY_NUMBER
    }

    fn parse(&self, cleaned: &str) -> Option<FieldValue> {
        Some(FieldValue::Text(cleaned.to_string()))
    }
}
