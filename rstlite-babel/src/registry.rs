//! Format registry for format discovery and selection

use crate::error::FormatError;
use crate::format::Format;
use rstlite_parser::Document;
use std::collections::HashMap;

/// Registry of document formats, retrievable by name.
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format. A format with the same name is replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<Document, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support parsing",
                format
            )));
        }
        fmt.parse(source)
    }

    /// Serialize a document using the specified format
    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize(doc)
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::rst::RstFormat);
        registry.register(crate::formats::html::HtmlFormat::default());
        registry.register(crate::formats::treeviz::TreevizFormat::default());

        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_registered() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.list_formats(), vec!["html", "rst", "treeviz"]);
        assert!(registry.has("rst"));
        assert!(!registry.has("pdf"));
    }

    #[test]
    fn unknown_format_is_reported() {
        let registry = FormatRegistry::with_defaults();
        let err = registry.get("docx").unwrap_err();
        assert_eq!(err, FormatError::FormatNotFound("docx".into()));
    }

    #[test]
    fn capability_flags_are_enforced() {
        let registry = FormatRegistry::with_defaults();
        // html cannot parse, rst cannot serialize.
        assert!(matches!(
            registry.parse("x", "html"),
            Err(FormatError::NotSupported(_))
        ));
        let doc = registry.parse("x", "rst").unwrap();
        assert!(matches!(
            registry.serialize(&doc, "rst"),
            Err(FormatError::NotSupported(_))
        ));
    }
}
