use handlebars::Handlebars;
use offset_render_core::{
    CertificateFooter, CertificateHeader, CertificateRenderer, DetailRow, DocumentProfile,
    RenderError, RenderedDocument,
};
use offset_types::Palette;
use serde::Serialize;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

const TEMPLATE_NAME: &str = "certificate";
const TEMPLATE_SOURCE: &str = include_str!("../templates/certificate.hbs");

#[derive(Serialize)]
struct TemplateContext<'a> {
    palette: &'a Palette,
    header: &'a CertificateHeader,
    rows: &'a [DetailRow],
    footer: &'a CertificateFooter,
}

/// Renders a certificate as a styled, self-contained HTML page.
///
/// Rows and header are buffered until `finish`, where the template is applied.
/// All field values go through handlebars' HTML escaping.
pub struct HtmlRenderer {
    template_engine: Handlebars<'static>,
    palette: Palette,
    header: Option<CertificateHeader>,
    rows: Vec<DetailRow>,
    footer: CertificateFooter,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self, RenderError> {
        Self::with_palette(Palette::CERTIFICATE)
    }

    pub fn with_palette(palette: Palette) -> Result<Self, RenderError> {
        let mut template_engine = Handlebars::new();
        template_engine.set_strict_mode(true);
        template_engine.register_template_string(TEMPLATE_NAME, TEMPLATE_SOURCE)?;

        Ok(Self {
            template_engine,
            palette,
            header: None,
            rows: Vec::new(),
            footer: CertificateFooter::default(),
        })
    }
}

impl CertificateRenderer for HtmlRenderer {
    fn profile(&self) -> DocumentProfile {
        DocumentProfile::Markup
    }

    fn begin_document(&mut self, header: &CertificateHeader) -> Result<(), RenderError> {
        self.header = Some(header.clone());
        self.rows.clear();
        Ok(())
    }

    fn detail_row(&mut self, row: &DetailRow) -> Result<(), RenderError> {
        if self.header.is_none() {
            return Err(RenderError::Other("Document not started".into()));
        }
        self.rows.push(row.clone());
        Ok(())
    }

    fn footer(&mut self, footer: &CertificateFooter) -> Result<(), RenderError> {
        self.footer = footer.clone();
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<RenderedDocument, RenderError> {
        let header = self
            .header
            .as_ref()
            .ok_or_else(|| RenderError::Other("Document was never started with begin_document".into()))?;

        let context = TemplateContext {
            palette: &self.palette,
            header,
            rows: &self.rows,
            footer: &self.footer,
        };
        let html = self.template_engine.render(TEMPLATE_NAME, &context)?;
        log::debug!("Rendered HTML certificate ({} bytes, {} rows)", html.len(), self.rows.len());

        Ok(RenderedDocument {
            bytes: html.into_bytes(),
            content_type: HTML_CONTENT_TYPE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rows: &[DetailRow]) -> String {
        let mut renderer = Box::new(HtmlRenderer::new().unwrap());
        renderer
            .begin_document(&CertificateHeader {
                title: "Carbon Credit Retirement Certificate".into(),
                subtitle: Some("Certificate of Carbon Emission Offset".into()),
                ..Default::default()
            })
            .unwrap();
        for row in rows {
            renderer.detail_row(row).unwrap();
        }
        renderer
            .footer(&CertificateFooter {
                disclaimer: "Proof of retirement.".into(),
                generated_on: "1/1/2024, 12:00:00 AM".into(),
            })
            .unwrap();
        let doc = renderer.finish().unwrap();
        assert_eq!(doc.content_type, HTML_CONTENT_TYPE);
        String::from_utf8(doc.bytes).unwrap()
    }

    #[test]
    fn test_rows_render_in_order() {
        let html = render(&[
            DetailRow::new("UNIC ID", "A1"),
            DetailRow::new("Project Name", "Solar Farm"),
        ]);
        let id_pos = html.find("UNIC ID:").unwrap();
        let name_pos = html.find("Project Name:").unwrap();
        assert!(id_pos < name_pos);
        assert!(html.contains("Solar Farm"));
        assert!(html.contains("Generated on 1/1/2024, 12:00:00 AM"));
        assert!(html.contains("#d4af37"));
    }

    #[test]
    fn test_values_are_escaped() {
        let html = render(&[DetailRow::new("Project Name", "<script>alert(1)</script>")]);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_value_still_renders_row() {
        let html = render(&[DetailRow::new("Project Name", "")]);
        assert!(html.contains("Project Name:"));
    }

    #[test]
    fn test_finish_without_begin_fails() {
        let renderer = Box::new(HtmlRenderer::new().unwrap());
        assert!(renderer.finish().is_err());
    }
}
