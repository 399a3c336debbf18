//! Format trait definition
//!
//! The core trait every format implements. A format can support parsing
//! (source text to document tree), serialization (tree to output text), or
//! both; the registry checks the capability flags before dispatching.

use crate::error::FormatError;
use rstlite_parser::Document;

impl std::fmt::Debug for dyn Format + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Format").field("name", &self.name()).finish()
    }
}

/// Trait for document formats
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "rst", "html", "treeviz")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Document)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Document → output)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a Document.
    ///
    /// The default implementation reports the operation as unsupported.
    fn parse(&self, _source: &str) -> Result<Document, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a Document into output text.
    ///
    /// The default implementation reports the operation as unsupported.
    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
