//! HTML fragment output (the preview renderer).

pub mod serializer;

pub use serializer::{escape, serialize_to_html};

use crate::error::FormatError;
use crate::format::Format;
use rstlite_parser::Document;

/// Rendering knobs.
///
/// Headings all render at one fixed level: the subset does not resolve
/// heading depth across the document.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlOptions {
    /// Level used for every section title (clamped to 1..=6).
    pub heading_level: u8,
    /// Class of the single wrapping `<div>`.
    pub document_class: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            heading_level: 2,
            document_class: "rst-document".to_string(),
        }
    }
}

/// Serializes the document tree to an HTML fragment.
#[derive(Default)]
pub struct HtmlFormat {
    pub options: HtmlOptions,
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment for preview"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_html(doc, &self.options))
    }
}
