use crate::helpers::{FontKey, PageContext};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use offset_render_core::utils::wrap_text;
use offset_render_core::{
    CertificateFooter, CertificateHeader, CertificateRenderer, DetailRow, DocumentProfile,
    RenderError, RenderedDocument,
};
use offset_types::Palette;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A4 portrait in points.
pub const PAGE_WIDTH_PT: f32 = 595.28;
pub const PAGE_HEIGHT_PT: f32 = 841.89;

// Page geometry, millimetres from the top-left corner.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const BORDER_INSET: f32 = 10.0;
const BORDER_WIDTH: f32 = 2.0;
const MARGIN_LEFT: f32 = 20.0;
const MARGIN_RIGHT: f32 = 190.0;
const BRAND_Y: f32 = 25.0;
const TITLE_Y: f32 = 45.0;
const DIVIDER_Y: f32 = 55.0;
const SECTION_Y: f32 = 75.0;
const FIRST_ROW_Y: f32 = 95.0;
const CONTINUATION_ROW_Y: f32 = 30.0;
const VALUE_X: f32 = 80.0;
const LINE_ADVANCE: f32 = 4.0;
const ROW_GAP: f32 = 8.0;
const FOOTER_RULE_Y: f32 = 250.0;
const ROWS_BOTTOM_LIMIT: f32 = FOOTER_RULE_Y - 5.0;
const DISCLAIMER_Y: f32 = 260.0;
const GENERATED_Y: f32 = 270.0;

const BRAND_SIZE: f32 = 16.0;
const TITLE_SIZE: f32 = 16.0;
const SECTION_SIZE: f32 = 14.0;
const LABEL_SIZE: f32 = 10.0;
const VALUE_SIZE: f32 = 9.0;
const FOOTER_SIZE: f32 = 8.0;

/// A PDF renderer built on an in-memory `lopdf::Document`.
///
/// Pages are decorated with the full-bleed background and the accent border as
/// they are opened; the footer lands on whichever page is current when
/// `footer` is called.
pub struct LopdfRenderer {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    current_page: Option<PageContext>,
    cursor_y: f32,
    palette: Palette,
    title: String,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl LopdfRenderer {
    pub fn new() -> Self {
        Self::with_palette(Palette::CERTIFICATE)
    }

    pub fn with_palette(palette: Palette) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let mut font_dict = Dictionary::new();
        for font in FontKey::ALL {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(font.resource_name().as_bytes(), Object::Dictionary(single_font_dict));
        }
        let resources_id = document.add_object(dictionary! { "Font" => font_dict });

        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            current_page: None,
            cursor_y: FIRST_ROW_Y,
            palette,
            title: String::new(),
        }
    }

    fn open_page(&mut self) -> Result<(), RenderError> {
        self.flush_page()?;
        let mut page = PageContext::new(PAGE_HEIGHT_PT);
        page.fill_rect(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT, self.palette.background);
        page.stroke_rect(
            BORDER_INSET,
            BORDER_INSET,
            PAGE_WIDTH - 2.0 * BORDER_INSET,
            PAGE_HEIGHT - 2.0 * BORDER_INSET,
            BORDER_WIDTH,
            self.palette.accent,
        );
        self.current_page = Some(page);
        Ok(())
    }

    fn page_mut(&mut self) -> Result<&mut PageContext, RenderError> {
        self.current_page
            .as_mut()
            .ok_or_else(|| RenderError::Other("Document not started".into()))
    }

    /// Writes the current page, if any, into the document.
    fn flush_page(&mut self) -> Result<(), RenderError> {
        let Some(page) = self.current_page.take() else {
            return Ok(());
        };
        let content = page.finish().encode()?;
        let content_id = self.document.add_object(Stream::new(dictionary! {}, content));
        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), PAGE_WIDTH_PT.into(), PAGE_HEIGHT_PT.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    fn write_catalog(&mut self) {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.document.objects.insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        let info_id = self.document.add_object(dictionary! {
            "Title" => Object::string_literal(self.title.clone()),
            "Producer" => Object::string_literal("offset"),
        });
        self.document.trailer.set("Root", catalog_id);
        self.document.trailer.set("Info", info_id);
    }
}

impl CertificateRenderer for LopdfRenderer {
    fn profile(&self) -> DocumentProfile {
        DocumentProfile::Printable
    }

    fn begin_document(&mut self, header: &CertificateHeader) -> Result<(), RenderError> {
        self.open_page()?;
        self.title = header.title.clone();
        let palette = self.palette;
        let page = self.page_mut()?;

        if let Some(brand) = &header.brand {
            page.text(MARGIN_LEFT, BRAND_Y, FontKey::Bold, BRAND_SIZE, palette.accent, brand);
        }
        page.text(MARGIN_LEFT, TITLE_Y, FontKey::Bold, TITLE_SIZE, palette.accent, &header.title);
        page.hline(MARGIN_LEFT, MARGIN_RIGHT, DIVIDER_Y, 1.0, palette.accent);
        if let Some(section) = &header.section {
            page.text(MARGIN_LEFT, SECTION_Y, FontKey::Bold, SECTION_SIZE, palette.value, section);
        }

        self.cursor_y = FIRST_ROW_Y;
        Ok(())
    }

    fn detail_row(&mut self, row: &DetailRow) -> Result<(), RenderError> {
        let palette = self.palette;
        let lines = wrap_text(&row.value, crate::mm_to_pt(MARGIN_RIGHT - VALUE_X), |c| {
            FontKey::Regular.char_width(c, VALUE_SIZE)
        });

        if self.cursor_y > ROWS_BOTTOM_LIMIT {
            log::debug!("Certificate rows overflow; starting continuation page");
            self.open_page()?;
            self.cursor_y = CONTINUATION_ROW_Y;
        }

        let label_y = self.cursor_y;
        self.page_mut()?
            .text(MARGIN_LEFT, label_y, FontKey::Bold, LABEL_SIZE, palette.accent, &format!("{}:", row.label));

        let mut line_y = label_y;
        for line in &lines {
            if line_y > ROWS_BOTTOM_LIMIT {
                self.open_page()?;
                line_y = CONTINUATION_ROW_Y;
            }
            self.page_mut()?
                .text(VALUE_X, line_y, FontKey::Regular, VALUE_SIZE, palette.value, line);
            line_y += LINE_ADVANCE;
        }

        self.cursor_y = line_y + ROW_GAP;
        Ok(())
    }

    fn footer(&mut self, footer: &CertificateFooter) -> Result<(), RenderError> {
        let palette = self.palette;
        let page = self.page_mut()?;
        page.hline(MARGIN_LEFT, MARGIN_RIGHT, FOOTER_RULE_Y, 1.0, palette.accent);
        page.text(MARGIN_LEFT, DISCLAIMER_Y, FontKey::Regular, FOOTER_SIZE, palette.muted, &footer.disclaimer);
        page.text(
            MARGIN_LEFT,
            GENERATED_Y,
            FontKey::Regular,
            FOOTER_SIZE,
            palette.muted,
            &format!("Generated on {}", footer.generated_on),
        );
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<RenderedDocument, RenderError> {
        let mut renderer = *self;
        if renderer.current_page.is_none() && renderer.page_ids.is_empty() {
            return Err(RenderError::Other(
                "Document was never started with begin_document".into(),
            ));
        }
        renderer.flush_page()?;
        renderer.write_catalog();

        let mut bytes = Vec::new();
        renderer.document.save_to(&mut bytes)?;
        log::debug!(
            "Rendered PDF certificate ({} bytes, {} pages)",
            bytes.len(),
            renderer.page_ids.len()
        );

        Ok(RenderedDocument {
            bytes,
            content_type: PDF_CONTENT_TYPE,
        })
    }
}
