//! Field table: which fields are extracted, from where first, and whether they are required.

use std::collections::HashSet;

use super::rules::{AmountExtractor, PolicyNumberExtractor};
use super::{ExtractionOutcome, FieldExtractor};
use crate::error::ConfigError;
use crate::models::config::ExtractionConfig;
use crate::models::result::Source;

/// Known field types, each bound to exactly one extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    PolicyNumber,
    LimitOfLiability,
    Deductible,
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [Self::PolicyNumber, Self::LimitOfLiability, Self::Deductible];

    /// Output key of this field.
    pub fn name(self) -> &'static str {
        match self {
            Self::PolicyNumber => "policy_number",
            Self::LimitOfLiability => "limit_of_liability",
            Self::Deductible => "deductible",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Run this field's extractor over a line sequence.
    pub fn extract(self, lines: &[String]) -> ExtractionOutcome {
        match self {
            Self::PolicyNumber => PolicyNumberExtractor::new().extract(lines),
            Self::LimitOfLiability => AmountExtractor::limit_of_liability().extract(lines),
            Self::Deductible => AmountExtractor::deductible().extract(lines),
        }
    }
}

/// One row of the field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub priority: Source,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(kind: FieldKind, priority: Source, required: bool) -> Self {
        Self {
            kind,
            priority,
            required,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Ordered field table with unique field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRegistry {
    specs: Vec<FieldSpec>,
}

impl FieldRegistry {
    /// Build a registry, rejecting empty tables and duplicate fields.
    pub fn new(specs: Vec<FieldSpec>) -> Result<Self, ConfigError> {
        if specs.is_empty() {
            return Err(ConfigError::NoFields);
        }

        let mut seen = HashSet::new();
        for spec in &specs {
            if !seen.insert(spec.kind) {
                return Err(ConfigError::DuplicateField(spec.name().to_string()));
            }
        }

        Ok(Self { specs })
    }

    /// Build a registry from the `extraction` configuration section.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ConfigError> {
        let specs = config
            .fields
            .iter()
            .map(|f| {
                FieldKind::from_name(&f.name)
                    .map(|kind| FieldSpec::new(kind, f.priority, f.required))
                    .ok_or_else(|| ConfigError::UnknownField(f.name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(specs)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.iter()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self {
            specs: vec![
                FieldSpec::new(FieldKind::PolicyNumber, Source::Email, true),
                FieldSpec::new(FieldKind::LimitOfLiability, Source::Email, true),
                FieldSpec::new(FieldKind::Deductible, Source::Email, false),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a FieldRegistry {
    type Item = &'a FieldSpec;
    type IntoIter = std::slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
