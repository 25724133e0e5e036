use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use offset_types::Color;

/// Converts millimetres to PDF points.
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * 72.0 / 25.4
}

/// Standard 14 fonts registered on every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKey {
    Regular,
    Bold,
}

impl FontKey {
    pub const ALL: [FontKey; 2] = [FontKey::Regular, FontKey::Bold];

    /// Resource name used inside content streams.
    pub fn resource_name(&self) -> &'static str {
        match self {
            FontKey::Regular => "F1",
            FontKey::Bold => "F2",
        }
    }

    pub fn base_font(&self) -> &'static str {
        match self {
            FontKey::Regular => "Helvetica",
            FontKey::Bold => "Helvetica-Bold",
        }
    }
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<FontKey>,
    font_size: f32,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// Drawing context for one page.
///
/// Takes millimetre coordinates with the origin at the top-left corner and
/// emits PDF operators, skipping redundant color, font and width changes.
pub struct PageContext {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    pub fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn flip_y(&self, y_mm: f32) -> f32 {
        self.page_height - mm_to_pt(y_mm)
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, width_mm: f32) {
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.unit_rgb();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
        if self.state.line_width != Some(width_mm) {
            self.push("w", vec![mm_to_pt(width_mm).into()]);
            self.state.line_width = Some(width_mm);
        }
    }

    fn set_font(&mut self, font: FontKey, size: f32) {
        if self.state.font != Some(font) || self.state.font_size != size {
            self.push(
                "Tf",
                vec![Object::Name(font.resource_name().as_bytes().to_vec()), size.into()],
            );
            self.state.font = Some(font);
            self.state.font_size = size;
        }
    }

    /// Fills a rectangle whose top-left corner is at (`x`, `y`).
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.set_fill_color(color);
        let bottom = self.flip_y(y + height);
        self.push(
            "re",
            vec![mm_to_pt(x).into(), bottom.into(), mm_to_pt(width).into(), mm_to_pt(height).into()],
        );
        self.push("f", vec![]);
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, line_width: f32, color: Color) {
        self.set_stroke(color, line_width);
        let bottom = self.flip_y(y + height);
        self.push(
            "re",
            vec![mm_to_pt(x).into(), bottom.into(), mm_to_pt(width).into(), mm_to_pt(height).into()],
        );
        self.push("S", vec![]);
    }

    /// Horizontal rule from `x1` to `x2` at height `y`.
    pub fn hline(&mut self, x1: f32, x2: f32, y: f32, line_width: f32, color: Color) {
        self.set_stroke(color, line_width);
        let pdf_y = self.flip_y(y);
        self.push("m", vec![mm_to_pt(x1).into(), pdf_y.into()]);
        self.push("l", vec![mm_to_pt(x2).into(), pdf_y.into()]);
        self.push("S", vec![]);
    }

    /// Draws a single line of text with its baseline at (`x`, `y`).
    pub fn text(&mut self, x: f32, y: f32, font: FontKey, size: f32, color: Color, text: &str) {
        if text.is_empty() {
            return;
        }
        let pdf_y = self.flip_y(y);
        self.push("BT", vec![]);
        // Text state does not survive ET, so the font is always re-selected.
        self.state.font = None;
        self.set_font(font, size);
        self.set_fill_color(color);
        self.push("Td", vec![mm_to_pt(x).into(), pdf_y.into()]);
        self.push("Tj", vec![Object::String(to_win_ansi(text), StringFormat::Literal)]);
        self.push("ET", vec![]);
    }
}

/// Encodes text for the WinAnsi-encoded standard fonts. Characters the
/// encoding has no byte for are replaced with `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    let mut lossy = false;
    let bytes = s
        .chars()
        .map(|c| {
            win_ansi_byte(c).unwrap_or_else(|| {
                lossy = true;
                b'?'
            })
        })
        .collect();
    if lossy {
        log::warn!("Text contains characters outside WinAnsi and was encoded lossily: {:?}", s);
    }
    bytes
}

fn win_ansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        '\u{0}'..='\u{7f}' | '\u{a0}'..='\u{ff}' => c as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        // C1 controls have no glyph here; those bytes mean the punctuation above.
        _ => return None,
    };
    Some(byte)
}
