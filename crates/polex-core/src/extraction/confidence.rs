//! Deterministic confidence scoring for resolved fields.

use crate::models::result::Source;

/// Additive weights. A found field collects these on top of nothing.
pub mod weights {
    /// Credit for any successful extraction.
    pub const BASE: f64 = 0.4;

    /// The value came from a known source.
    pub const KNOWN_SOURCE: f64 = 0.3;

    /// Exactly one distinct value matched.
    pub const UNIQUE_MATCH: f64 = 0.2;

    /// The field is required.
    pub const REQUIRED: f64 = 0.1;
}

/// Inputs to the confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceSignals {
    pub found: bool,
    pub source: Option<Source>,
    pub required: bool,
    pub unique: bool,
}

/// Compute a confidence in [0.0, 1.0], rounded to two decimals.
///
/// Ambiguous extractions never resolve to a value, so `unique` holds for
/// every found field.
pub fn score(signals: ConfidenceSignals) -> f64 {
    if !signals.found {
        return 0.0;
    }

    let mut confidence = weights::BASE;
    if signals.source.is_some() {
        confidence += weights::KNOWN_SOURCE;
    }
    if signals.unique {
        confidence += weights::UNIQUE_MATCH;
    }
    if signals.required {
        confidence += weights::REQUIRED;
    }

    round2(confidence.min(1.0))
}

fn round2(value: f64) -> f64 {
    ((value * 100.0).round() / 100.0).clamp(0.0, 1.0)
}
