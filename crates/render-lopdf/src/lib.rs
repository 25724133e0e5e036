//! Printable PDF certificate renderer using lopdf.
//!
//! Certificates are laid out on A4 portrait pages in millimetre coordinates
//! with a top-left origin, and converted to PDF user space when drawn. Rows
//! that would run into the footer band continue on a fresh page.

mod helpers;
mod metrics;
mod renderer;

pub use helpers::{mm_to_pt, to_win_ansi, FontKey, PageContext};
pub use renderer::{LopdfRenderer, PDF_CONTENT_TYPE, PAGE_HEIGHT_PT, PAGE_WIDTH_PT};
