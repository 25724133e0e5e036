//! Core rendering abstractions for certificate documents.
//!
//! This crate provides the pieces shared by every export backend:
//! - `CertificateRenderer`, the header/detail-row/footer capability a backend implements
//! - Error types for rendering operations
//! - Shared utilities for date formatting, certificate ids and text wrapping

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::CertificateRenderer;
pub use types::{CertificateFooter, CertificateHeader, DetailRow, DocumentProfile, RenderedDocument};
