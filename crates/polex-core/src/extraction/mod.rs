//! Field extraction, source resolution, scoring and validation.

pub mod confidence;
mod pipeline;
mod registry;
pub mod resolver;
pub mod rules;
pub mod validation;

pub use pipeline::{run_pipeline, Pipeline};
pub use registry::{FieldKind, FieldRegistry, FieldSpec};
pub use resolver::{Resolution, SourceLines};

use std::collections::BTreeSet;

use regex::Regex;
use tracing::debug;

use crate::models::result::FieldValue;

/// Result of running one extractor over one line sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// Exactly one distinct value was captured.
    Found(FieldValue),
    /// Nothing usable was captured.
    NoMatch,
    /// Several distinct values were captured; none is chosen.
    Ambiguous { candidates: usize },
}

impl ExtractionOutcome {
    pub fn into_value(self) -> Option<FieldValue> {
        match self {
            Self::Found(value) => Some(value),
            Self::NoMatch | Self::Ambiguous { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Trait for field extractors.
///
/// Implementors supply the labeled pattern and value parsing; scanning and
/// ambiguity handling are shared.
pub trait FieldExtractor {
    /// Pattern with a `value` capture group.
    fn pattern(&self) -> &Regex;

    /// Strip field-specific formatting from a captured value.
    fn clean(&self, captured: &str) -> String {
        captured.to_string()
    }

    /// Convert a cleaned capture into a value. `None` means the capture is unusable.
    fn parse(&self, cleaned: &str) -> Option<FieldValue>;

    /// Cleaned captures, one per matching line (first match on each line).
    fn extract_all(&self, lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .filter_map(|line| self.pattern().captures(line))
            .filter_map(|caps| caps.name("value").map(|m| self.clean(m.as_str())))
            .collect()
    }

    /// Extract a single unambiguous value.
    fn extract(&self, lines: &[String]) -> ExtractionOutcome {
        let distinct: BTreeSet<String> = self.extract_all(lines).into_iter().collect();

        match distinct.len() {
            0 => ExtractionOutcome::NoMatch,
            1 => {
                let cleaned = distinct.into_iter().next().unwrap_or_default();
                match self.parse(&cleaned) {
                    Some(value) => ExtractionOutcome::Found(value),
                    None => {
                        debug!("discarding unparseable capture {:?}", cleaned);
                        ExtractionOutcome::NoMatch
                    }
                }
            }
            n => {
                debug!("{} conflicting captures: {:?}", n, distinct);
                ExtractionOutcome::Ambiguous { candidates: n }
            }
        }
    }
}
