//! Self-contained HTML certificate renderer.
//!
//! The whole document, styles included, is produced from a single handlebars
//! template so the output opens in any browser without external assets.

mod renderer;

pub use renderer::{HtmlRenderer, HTML_CONTENT_TYPE};
