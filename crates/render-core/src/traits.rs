use crate::error::RenderError;
use crate::types::{CertificateFooter, CertificateHeader, DetailRow, DocumentProfile, RenderedDocument};

/// A trait for certificate renderers, abstracting the document-writing primitives.
///
/// Callers drive a renderer in a fixed order: `begin_document` once, `detail_row`
/// once per field, `footer` once, then `finish`. The same driver therefore works
/// for every backend without branching on the output format.
pub trait CertificateRenderer {
    /// Which set of detail rows this backend lays out.
    fn profile(&self) -> DocumentProfile;

    fn begin_document(&mut self, header: &CertificateHeader) -> Result<(), RenderError>;

    fn detail_row(&mut self, row: &DetailRow) -> Result<(), RenderError>;

    fn footer(&mut self, footer: &CertificateFooter) -> Result<(), RenderError>;

    /// Consumes the renderer and returns the finished document.
    fn finish(self: Box<Self>) -> Result<RenderedDocument, RenderError>;
}
