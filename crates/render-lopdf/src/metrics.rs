//! Glyph advance widths of the standard Helvetica faces, in 1/1000 em.

use crate::helpers::FontKey;

// Printable ASCII, 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

// Outside ASCII only the widest glyphs get their own entry; everything else
// is measured at the width of the broadest capitals.
const WIDE: u16 = 1000;
const FALLBACK: u16 = 778;

fn glyph_width(font: FontKey, c: char) -> u16 {
    let table = match font {
        FontKey::Regular => &HELVETICA,
        FontKey::Bold => &HELVETICA_BOLD,
    };
    match c {
        ' '..='~' => table[c as usize - 0x20],
        '—' | '…' | '‰' | '™' | 'Œ' | 'Æ' => WIDE,
        'œ' | 'æ' => 944,
        _ => FALLBACK,
    }
}

impl FontKey {
    /// Advance width of `c` in points at `size`.
    pub fn char_width(self, c: char, size: f32) -> f32 {
        f32::from(glyph_width(self, c)) * size / 1000.0
    }
}
