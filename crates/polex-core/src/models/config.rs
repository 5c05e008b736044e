//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use super::result::Source;

/// Version tag stamped into run metadata when none is configured.
pub const DEFAULT_VERSION_TAG: &str = "v1";

/// Main configuration for the polex pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolexConfig {
    /// Field table configuration.
    pub extraction: ExtractionConfig,

    /// Noise filter configuration.
    pub noise: NoiseConfig,

    /// Run metadata configuration.
    pub metadata: MetadataConfig,
}

/// Field table configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Fields to extract, in output order.
    pub fields: Vec<FieldConfig>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fields: vec![
                FieldConfig::new("policy_number", Source::Email, true),
                FieldConfig::new("limit_of_liability", Source::Email, true),
                FieldConfig::new("deductible", Source::Email, false),
            ],
        }
    }
}

/// One row of the field table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Field name; must match a known extractor.
    pub name: String,

    /// Source tried first.
    #[serde(default = "default_priority")]
    pub priority: Source,

    /// Whether a missing value is reported as `required_field_missing`.
    #[serde(default)]
    pub required: bool,
}

fn default_priority() -> Source {
    Source::Email
}

impl FieldConfig {
    pub fn new(name: impl Into<String>, priority: Source, required: bool) -> Self {
        Self {
            name: name.into(),
            priority,
            required,
        }
    }
}

/// Noise filter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Markers of a closing signature block; the first matching line ends the text.
    pub signature_markers: Vec<String>,

    /// Markers of contact-detail lines, which are dropped.
    pub contact_markers: Vec<String>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            signature_markers: ["regards", "thanks", "thank you", "sincerely"]
                .map(String::from)
                .to_vec(),
            contact_markers: ["phone", "tel", "mobile", "www"].map(String::from).to_vec(),
        }
    }
}

/// Run metadata configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Version tag stamped into every result.
    pub version: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION_TAG.to_string(),
        }
    }
}

impl PolexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
