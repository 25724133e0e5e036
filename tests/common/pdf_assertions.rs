use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};
use std::collections::BTreeSet;

/// Every `Tj` string on a page, in drawing order.
pub fn page_text_runs(doc: &LopdfDocument, page_num: u32) -> Vec<String> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_num) else {
        return Vec::new();
    };
    let Ok(raw) = doc.get_page_content(*page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&raw) else {
        return Vec::new();
    };
    content
        .operations
        .into_iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(bytes.iter().map(|&b| b as char).collect()),
            _ => None,
        })
        .collect()
}

/// Text runs of all pages, in page order.
pub fn all_text_runs(doc: &LopdfDocument) -> Vec<String> {
    let page_count = doc.get_pages().len() as u32;
    (1..=page_count).flat_map(|page| page_text_runs(doc, page)).collect()
}

/// Base font names registered in the first page's resources.
pub fn font_names(doc: &LopdfDocument) -> BTreeSet<String> {
    let mut fonts = BTreeSet::new();
    let Some(page_id) = doc.get_pages().values().next().copied() else {
        return fonts;
    };
    let resolve = |obj: &Object| -> Option<lopdf::Dictionary> {
        match obj {
            Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok().cloned(),
            Object::Dictionary(dict) => Some(dict.clone()),
            _ => None,
        }
    };

    let page = doc.get_object(page_id).ok().and_then(|obj| obj.as_dict().ok());
    let resources = page.and_then(|page| page.get(b"Resources").ok()).and_then(resolve);
    let font_dict = resources
        .as_ref()
        .and_then(|resources| resources.get(b"Font").ok())
        .and_then(resolve);

    if let Some(font_dict) = font_dict {
        for (_name, font) in font_dict.iter() {
            if let Some(font) = resolve(font) {
                if let Ok(base_font) = font.get(b"BaseFont").and_then(Object::as_name) {
                    fonts.insert(String::from_utf8_lossy(base_font).into_owned());
                }
            }
        }
    }
    fonts
}

/// MediaBox of a page as (width, height).
pub fn page_size(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let page_id = *doc.get_pages().get(&page_num)?;
    let page = doc.get_object(page_id).ok()?.as_dict().ok()?;
    let media_box = page.get(b"MediaBox").ok()?.as_array().ok()?;
    let number = |obj: &Object| obj.as_float().ok().or_else(|| obj.as_i64().ok().map(|i| i as f32));
    Some((number(media_box.get(2)?)?, number(media_box.get(3)?)?))
}

#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $expected:expr) => {
        assert_eq!($pdf.page_count(), $expected, "unexpected page count");
    };
}

#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $needle:expr) => {
        let runs = $crate::common::pdf_assertions::all_text_runs(&$pdf.doc);
        assert!(
            runs.iter().any(|run| run.contains($needle)),
            "expected PDF text to contain {:?}, got {:?}",
            $needle,
            runs
        );
    };
}
