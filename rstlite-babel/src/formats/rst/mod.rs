//! The native input format: the rst subset.

use crate::error::FormatError;
use crate::format::Format;
use rstlite_parser::Document;

/// Parses rst-subset source into the document tree.
///
/// Parsing is total: malformed constructs surface as error nodes inside the
/// tree, so this format never returns an error for any input.
pub struct RstFormat;

impl Format for RstFormat {
    fn name(&self) -> &str {
        "rst"
    }

    fn description(&self) -> &str {
        "reStructuredText subset"
    }

    fn file_extensions(&self) -> &[&str] {
        &["rst", "rest"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(rstlite_parser::parse(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstlite_parser::NodeKind;

    #[test]
    fn parse_is_total() {
        let doc = RstFormat.parse("Title\n--").unwrap();
        let kinds: Vec<_> = doc
            .children(doc.root())
            .iter()
            .map(|&id| doc.node(id).kind)
            .collect();
        assert_eq!(kinds, vec![NodeKind::Error]);
    }
}
