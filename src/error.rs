// src/error.rs
use crate::dataset::DatasetError;
use crate::export::ExportError;
use crate::paginate::PaginationError;
use thiserror::Error;

/// A comprehensive error type for the dashboard and export pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Dataset could not be loaded: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Invalid pagination request: {0}")]
    Pagination(#[from] PaginationError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
