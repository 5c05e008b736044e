//! Two-source priority resolution.

use tracing::debug;

use super::FieldSpec;
use crate::models::result::{FieldValue, Source};
use crate::text::{prepare, NoiseFilter};

/// Prepared line sequences for both sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLines {
    pub email: Vec<String>,
    pub document: Vec<String>,
}

impl SourceLines {
    /// Normalize and filter both raw texts.
    pub fn prepare(email_text: &str, doc_text: &str, filter: &NoiseFilter) -> Self {
        Self {
            email: prepare(email_text, filter),
            document: prepare(doc_text, filter),
        }
    }

    pub fn get(&self, source: Source) -> &[String] {
        match source {
            Source::Email => &self.email,
            Source::Document => &self.document,
        }
    }
}

/// Value and provenance for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub value: Option<FieldValue>,
    pub source: Option<Source>,
}

impl Resolution {
    fn found(value: FieldValue, source: Source) -> Self {
        Self {
            value: Some(value),
            source: Some(source),
        }
    }

    fn missing() -> Self {
        Self {
            value: None,
            source: None,
        }
    }
}

/// Try the preferred source, then the other one.
pub fn resolve(spec: &FieldSpec, lines: &SourceLines) -> Resolution {
    let preferred = spec.priority;

    for source in [preferred, preferred.other()] {
        let outcome = spec.kind.extract(lines.get(source));
        debug!("{} from {}: {:?}", spec.name(), source, outcome);

        if let Some(value) = outcome.into_value() {
            return Resolution::found(value, source);
        }
    }

    Resolution::missing()
}
