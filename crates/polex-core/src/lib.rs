//! Core library for insurance policy field extraction.
//!
//! This crate provides:
//! - Text normalization and noise filtering for email and document bodies
//! - Rule-based field extraction (policy number, limit of liability, deductible)
//! - Source priority resolution with confidence scoring and provenance
//! - A pipeline producing one wrapped result per configured field

pub mod error;
pub mod extraction;
pub mod models;
pub mod text;

pub use error::{ConfigError, PolexError, Result};
pub use extraction::{
    run_pipeline, ExtractionOutcome, FieldExtractor, FieldKind, FieldRegistry, FieldSpec,
    Pipeline,
};
pub use models::config::PolexConfig;
pub use models::metadata::{MetadataProvider, RunMetadata, SystemMetadataProvider};
pub use models::result::{FieldValue, MissingReason, PipelineResult, Source, WrappedField};
pub use text::{normalize, NoiseFilter};
