//! Run metadata and the capability that produces it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata stamped onto every pipeline result. Opaque to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Unique run identifier.
    pub run_id: String,

    /// Run start time (UTC, serialized as ISO-8601).
    pub timestamp: DateTime<Utc>,

    /// Version tag of the extraction rules.
    pub version: String,
}

/// Produces run metadata once per pipeline invocation.
pub trait MetadataProvider {
    fn generate(&self) -> RunMetadata;
}

/// A fixed value is its own provider, which keeps runs deterministic.
impl MetadataProvider for RunMetadata {
    fn generate(&self) -> RunMetadata {
        self.clone()
    }
}

/// Reads the wall clock and a random v4 UUID.
#[derive(Debug, Clone)]
pub struct SystemMetadataProvider {
    version: String,
}

impl SystemMetadataProvider {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl Default for SystemMetadataProvider {
    fn default() -> Self {
        Self::new(super::config::DEFAULT_VERSION_TAG)
    }
}

impl MetadataProvider for SystemMetadataProvider {
    fn generate(&self) -> RunMetadata {
        RunMetadata {
            run_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            version: self.version.clone(),
        }
    }
}
