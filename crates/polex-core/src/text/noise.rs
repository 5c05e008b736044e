//! Signature, contact and footer noise removal.

use tracing::trace;

use crate::error::ConfigError;
use crate::models::config::NoiseConfig;

/// Drops noise lines from a normalized line sequence.
///
/// Rules, checked per line in order:
/// 1. a signature marker ends the text (that line and everything after is dropped);
/// 2. a line containing `@` is dropped;
/// 3. a line containing a contact marker is dropped;
/// 4. anything else is kept.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    signature_markers: Vec<String>,
    contact_markers: Vec<String>,
}

impl NoiseFilter {
    /// Create a filter with the default marker sets.
    pub fn new() -> Self {
        let defaults = NoiseConfig::default();
        Self {
            signature_markers: defaults.signature_markers,
            contact_markers: defaults.contact_markers,
        }
    }

    /// Build a filter from configuration. Markers are lowercased; empty markers are rejected.
    pub fn from_config(config: &NoiseConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            signature_markers: clean_markers(&config.signature_markers, "signature_markers")?,
            contact_markers: clean_markers(&config.contact_markers, "contact_markers")?,
        })
    }

    /// Apply the filter. Input lines are expected to be lowercased already.
    pub fn apply(&self, lines: Vec<String>) -> Vec<String> {
        let mut kept = Vec::with_capacity(lines.len());

        for line in lines {
            if contains_any(&line, &self.signature_markers) {
                trace!("signature marker in {:?}, truncating", line);
                break;
            }
            if line.contains('@') || contains_any(&line, &self.contact_markers) {
                trace!("dropping contact line {:?}", line);
                continue;
            }
            kept.push(line);
        }

        kept
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_any(line: &str, markers: &[String]) -> bool {
    markers.iter().any(|m| line.contains(m.as_str()))
}

fn clean_markers(markers: &[String], set: &'static str) -> Result<Vec<String>, ConfigError> {
    markers
        .iter()
        .map(|m| {
            let m = m.trim().to_lowercase();
            if m.is_empty() {
                Err(ConfigError::EmptyMarker(set))
            } else {
                Ok(m)
            }
        })
        .collect()
}
