//! Pipeline orchestration: prepare both sources, resolve every field, assemble the result.

use indexmap::IndexMap;
use tracing::{debug, info};

use super::confidence::{score, ConfidenceSignals};
use super::resolver::{resolve, SourceLines};
use super::validation::validate;
use super::{FieldRegistry, FieldSpec};
use crate::error::ConfigError;
use crate::models::config::PolexConfig;
use crate::models::metadata::{MetadataProvider, RunMetadata, SystemMetadataProvider};
use crate::models::result::{MissingReason, PipelineResult, WrappedField};
use crate::text::NoiseFilter;

/// Extraction pipeline over an email body and a document body.
pub struct Pipeline {
    registry: FieldRegistry,
    noise: NoiseFilter,
    metadata: Box<dyn MetadataProvider>,
}

impl Pipeline {
    /// Create a pipeline with the default field table, noise filter and system metadata.
    pub fn new() -> Self {
        Self {
            registry: FieldRegistry::default(),
            noise: NoiseFilter::default(),
            metadata: Box::new(SystemMetadataProvider::default()),
        }
    }

    /// Build a pipeline from configuration.
    pub fn from_config(config: &PolexConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            registry: FieldRegistry::from_config(&config.extraction)?,
            noise: NoiseFilter::from_config(&config.noise)?,
            metadata: Box::new(SystemMetadataProvider::new(config.metadata.version.clone())),
        })
    }

    /// Set the field table.
    pub fn with_registry(mut self, registry: FieldRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set the noise filter.
    pub fn with_noise_filter(mut self, noise: NoiseFilter) -> Self {
        self.noise = noise;
        self
    }

    /// Set the run metadata provider.
    pub fn with_metadata_provider(mut self, provider: impl MetadataProvider + 'static) -> Self {
        self.metadata = Box::new(provider);
        self
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Run the pipeline. Never fails: unextractable fields carry a reason instead.
    pub fn run(&self, email_text: &str, doc_text: &str) -> PipelineResult {
        let metadata = self.metadata.generate();
        self.run_with_metadata(email_text, doc_text, metadata)
    }

    /// Run the pipeline with caller-supplied metadata.
    pub fn run_with_metadata(
        &self,
        email_text: &str,
        doc_text: &str,
        metadata: RunMetadata,
    ) -> PipelineResult {
        let lines = SourceLines::prepare(email_text, doc_text, &self.noise);
        debug!(
            "prepared {} email lines and {} document lines",
            lines.email.len(),
            lines.document.len()
        );

        let fields: IndexMap<String, WrappedField> = self
            .registry
            .iter()
            .map(|spec| (spec.name().to_string(), process_field(spec, &lines)))
            .collect();

        let result = PipelineResult { metadata, fields };

        info!(
            "run {}: {}/{} fields found, missing required: {:?}",
            result.metadata.run_id,
            result.found_count(),
            result.fields.len(),
            result.missing_required()
        );

        result
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve, score and validate one field.
pub fn process_field(spec: &FieldSpec, lines: &SourceLines) -> WrappedField {
    let resolution = resolve(spec, lines);
    let found = resolution.value.is_some();

    let confidence = score(ConfidenceSignals {
        found,
        source: resolution.source,
        required: spec.required,
        unique: found,
    });

    let mut field = WrappedField {
        value: resolution.value,
        source: resolution.source,
        confidence,
        required: spec.required,
        reason: (!found).then_some(MissingReason::NotFound),
    };
    validate(&mut field, spec);

    field
}

/// Run the default pipeline over an email body and a document body.
pub fn run_pipeline(email_text: &str, doc_text: &str) -> PipelineResult {
    Pipeline::new().run(email_text, doc_text)
}
