//! Markdown formatter, delegated to comrak.
//!
//! No adaptation layer: the Markdown dialect is whatever comrak's defaults
//! accept, and the output is used as-is.

use comrak::{markdown_to_html, Options};

/// Convert Markdown text to HTML.
pub fn to_html(text: &str) -> String {
    markdown_to_html(text, &Options::default())
}
