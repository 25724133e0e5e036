// src/export.rs
//! Certificate export: lays a certificate out as header, detail rows and
//! footer, drives the chosen backend, and hands the finished file to a sink.

use offset_render_core::utils::{certificate_id, format_date, format_date_time, format_time};
use offset_render_core::{
    CertificateFooter, CertificateHeader, CertificateRenderer, DetailRow, DocumentProfile, RenderError,
};
use offset_render_html::{HtmlRenderer, HTML_CONTENT_TYPE};
use offset_render_lopdf::{LopdfRenderer, PDF_CONTENT_TYPE};
use offset_types::{Palette, RetirementCertificate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const FILENAME_PREFIX: &str = "carbon-credit-certificate-";
pub const DISCLAIMER: &str = "This certificate serves as proof of carbon credit retirement and emission offset.";
pub const VERIFIED_BY: &str = "Offset Carbon Credits Platform";
pub const BRAND: &str = "OFFSET CARBON CREDITS";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("No credit with id '{0}'")]
    UnknownCredit(String),

    #[error("Failed to save '{path}': {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported export format '{0}'; expected 'html' or 'pdf'")]
pub struct UnsupportedFormat(pub String);

/// The downloadable document formats.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Html,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Html => HTML_CONTENT_TYPE,
            ExportFormat::Pdf => PDF_CONTENT_TYPE,
        }
    }

    /// `carbon-credit-certificate-<id>.<ext>`
    pub fn filename_for(&self, credit_id: &str) -> String {
        format!("{}{}.{}", FILENAME_PREFIX, credit_id, self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" | "htm" => Ok(ExportFormat::Html),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Header, rows and footer for one certificate, ready to be fed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateLayout {
    pub header: CertificateHeader,
    pub rows: Vec<DetailRow>,
    pub footer: CertificateFooter,
}

impl CertificateLayout {
    pub fn new(certificate: &RetirementCertificate, profile: DocumentProfile) -> Self {
        let issued_at = certificate.issued_at_iso();
        let retirement_date = format_date(&certificate.issued_at);
        let footer = CertificateFooter {
            disclaimer: DISCLAIMER.to_string(),
            generated_on: format_date_time(&certificate.issued_at),
        };

        match profile {
            DocumentProfile::Markup => Self {
                header: CertificateHeader {
                    brand: None,
                    title: "Carbon Credit Retirement Certificate".to_string(),
                    subtitle: Some("Certificate of Carbon Emission Offset".to_string()),
                    section: None,
                },
                rows: vec![
                    DetailRow::new("UNIC ID", certificate.id.as_str()),
                    DetailRow::new("Project Name", certificate.project_name.as_str()),
                    DetailRow::new("Vintage", certificate.vintage_year.to_string()),
                    DetailRow::new("Status", certificate.status.as_str()),
                    DetailRow::new("Retirement Date", retirement_date),
                    DetailRow::new("Timestamp", issued_at),
                ],
                footer,
            },
            DocumentProfile::Printable => Self {
                header: CertificateHeader {
                    brand: Some(BRAND.to_string()),
                    title: "CARBON CREDIT RETIREMENT CERTIFICATE".to_string(),
                    subtitle: None,
                    section: Some("CERTIFICATE DETAILS".to_string()),
                },
                rows: vec![
                    DetailRow::new("Certificate Number", certificate.id.as_str()),
                    DetailRow::new("Project Name", certificate.project_name.as_str()),
                    DetailRow::new("Vintage Year", certificate.vintage_year.to_string()),
                    DetailRow::new("Credit Status", certificate.status.as_str()),
                    DetailRow::new("Retirement Date", retirement_date),
                    DetailRow::new("Retirement Time", format_time(&certificate.issued_at)),
                    DetailRow::new("Certificate ID", certificate_id(&certificate.id)),
                    DetailRow::new("Verified By", VERIFIED_BY),
                    DetailRow::new("Full Timestamp", issued_at),
                ],
                footer,
            },
        }
    }
}

/// Drives `renderer` through one certificate.
pub fn render_certificate(
    certificate: &RetirementCertificate,
    mut renderer: Box<dyn CertificateRenderer>,
) -> Result<Vec<u8>, RenderError> {
    let layout = CertificateLayout::new(certificate, renderer.profile());
    renderer.begin_document(&layout.header)?;
    for row in &layout.rows {
        renderer.detail_row(row)?;
    }
    renderer.footer(&layout.footer)?;
    Ok(renderer.finish()?.bytes)
}

/// A finished, named document waiting to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Produces certificate files in either format.
#[derive(Debug, Clone, Copy, Default)]
pub struct CertificateExporter {
    palette: Palette,
}

impl CertificateExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self { palette }
    }

    fn renderer_for(&self, format: ExportFormat) -> Result<Box<dyn CertificateRenderer>, RenderError> {
        let renderer: Box<dyn CertificateRenderer> = match format {
            ExportFormat::Html => Box::new(HtmlRenderer::with_palette(self.palette)?),
            ExportFormat::Pdf => Box::new(LopdfRenderer::with_palette(self.palette)),
        };
        Ok(renderer)
    }

    pub fn export(&self, certificate: &RetirementCertificate, format: ExportFormat) -> Result<ExportedFile, ExportError> {
        let renderer = self.renderer_for(format)?;
        let bytes = render_certificate(certificate, renderer)?;
        log::info!("Exported {} certificate for {} ({} bytes)", format, certificate.id, bytes.len());

        Ok(ExportedFile {
            filename: format.filename_for(&certificate.id),
            content_type: format.content_type(),
            bytes,
        })
    }

    /// Exports and immediately hands the file to `sink`. The document buffer
    /// is owned by the sink call and released when it returns.
    pub fn export_to<S: DownloadSink + ?Sized>(
        &self,
        certificate: &RetirementCertificate,
        format: ExportFormat,
        sink: &mut S,
    ) -> Result<(), ExportError> {
        let file = self.export(certificate, format)?;
        sink.save(file)
    }
}

/// Where exported files end up; the counterpart of a browser download.
pub trait DownloadSink {
    fn save(&mut self, file: ExportedFile) -> Result<(), ExportError>;
}

/// Writes each file into a directory, creating it on first use.
///
/// Path separators in a file name are replaced with `_`, so every file lands
/// directly inside the directory whatever the credit id looks like.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename.replace(['/', '\\'], "_"))
    }
}

impl DownloadSink for DirectorySink {
    fn save(&mut self, file: ExportedFile) -> Result<(), ExportError> {
        fs::create_dir_all(&self.dir).map_err(|source| ExportError::Save {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(&file.filename);
        fs::write(&path, &file.bytes).map_err(|source| ExportError::Save {
            path: path.clone(),
            source,
        })?;
        log::info!("Saved {} ({})", path.display(), file.content_type);
        Ok(())
    }
}

/// Keeps saved files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub files: Vec<ExportedFile>,
}

impl DownloadSink for MemorySink {
    fn save(&mut self, file: ExportedFile) -> Result<(), ExportError> {
        self.files.push(file);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::{CertificateBuilder, FixedClock};
    use offset_types::{CarbonCredit, CreditStatus};

    fn certificate() -> RetirementCertificate {
        let credit = CarbonCredit::new("UNIC-9999ZZZZ", "Test", 2019, CreditStatus::Active);
        CertificateBuilder::new(FixedClock::parse("2024-01-01T00:00:00Z").unwrap()).build(&credit)
    }

    fn labels(layout: &CertificateLayout) -> Vec<&str> {
        layout.rows.iter().map(|row| row.label.as_str()).collect()
    }

    #[test]
    fn test_markup_layout_has_six_fields_in_order() {
        let layout = CertificateLayout::new(&certificate(), DocumentProfile::Markup);
        assert_eq!(
            labels(&layout),
            vec!["UNIC ID", "Project Name", "Vintage", "Status", "Retirement Date", "Timestamp"]
        );
        assert_eq!(layout.rows[4].value, "1/1/2024");
        assert_eq!(layout.rows[5].value, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_printable_layout_adds_certificate_id_and_attribution() {
        let layout = CertificateLayout::new(&certificate(), DocumentProfile::Printable);
        let row = |label: &str| {
            layout
                .rows
                .iter()
                .find(|row| row.label == label)
                .map(|row| row.value.clone())
                .unwrap()
        };
        assert_eq!(row("Certificate ID"), "CERT-9999ZZZZ");
        assert_eq!(row("Verified By"), VERIFIED_BY);
        assert_eq!(row("Certificate Number"), "UNIC-9999ZZZZ");
        assert_eq!(row("Full Timestamp"), "2024-01-01T00:00:00Z");
        assert_eq!(layout.footer.generated_on, "1/1/2024, 12:00:00 AM");
    }

    #[test]
    fn test_filenames_and_content_types() {
        assert_eq!(ExportFormat::Html.filename_for("A1"), "carbon-credit-certificate-A1.html");
        assert_eq!(ExportFormat::Pdf.filename_for("A1"), "carbon-credit-certificate-A1.pdf");
        assert_eq!(ExportFormat::Pdf.content_type(), "application/pdf");
        assert!(ExportFormat::Html.content_type().starts_with("text/html"));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert_eq!("html".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert_eq!("docx".parse::<ExportFormat>(), Err(UnsupportedFormat("docx".to_string())));
    }

    #[test]
    fn test_repeated_exports_are_independent() {
        let exporter = CertificateExporter::new();
        let mut sink = MemorySink::default();
        let cert = certificate();
        exporter.export_to(&cert, ExportFormat::Html, &mut sink).unwrap();
        exporter.export_to(&cert, ExportFormat::Html, &mut sink).unwrap();
        assert_eq!(sink.files.len(), 2);
        assert_eq!(sink.files[0], sink.files[1]);
    }

    #[test]
    fn test_directory_sink_flattens_path_separators() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path().join("out"));
        let credit = CarbonCredit::new("VCS/1234\\ABCD", "Test", 2019, CreditStatus::Active);
        let cert = CertificateBuilder::new(FixedClock::parse("2024-01-01T00:00:00Z").unwrap()).build(&credit);

        CertificateExporter::new()
            .export_to(&cert, ExportFormat::Pdf, &mut sink)
            .unwrap();

        let saved = dir.path().join("out").join("carbon-credit-certificate-VCS_1234_ABCD.pdf");
        assert_eq!(sink.path_for(&ExportFormat::Pdf.filename_for(&credit.id)), saved);
        assert!(std::fs::read(&saved).unwrap().starts_with(b"%PDF-"));
    }
}
