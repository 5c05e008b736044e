//! Text preparation: normalization and noise filtering.

mod noise;
mod normalizer;

pub use noise::NoiseFilter;
pub use normalizer::normalize;

/// Normalize raw text and drop noise lines in one step.
pub fn prepare(raw: &str, filter: &NoiseFilter) -> Vec<String> {
    filter.apply(normalize(raw))
}
