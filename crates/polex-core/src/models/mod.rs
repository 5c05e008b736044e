//! Data models for pipeline configuration, run metadata and results.

pub mod config;
pub mod metadata;
pub mod result;
