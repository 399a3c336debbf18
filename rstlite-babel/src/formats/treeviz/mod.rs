//! Treeviz formatter for document trees
//!
//! Treeviz is a one-line-per-node view of the tree, for diagnostics: an
//! icon, a space, and the node's label (its arguments, truncated). Nesting
//! is encoded as two spaces of indentation per level. The formatter only
//! reads the tree; it can never influence parsing results.

use crate::error::FormatError;
use crate::format::Format;
use rstlite_parser::{Document, NodeId, NodeKind};

/// Default character budget for one node label.
pub const DEFAULT_LABEL_WIDTH: usize = 30;

/// Dump a document tree, one line per node.
pub fn to_treeviz(doc: &Document, label_width: usize) -> String {
    let mut output = String::new();
    write_node(doc, doc.root(), 0, label_width, &mut output);
    output
}

fn write_node(doc: &Document, id: NodeId, depth: usize, label_width: usize, output: &mut String) {
    let node = doc.node(id);
    let label = truncate(&node.args.join(" "), label_width);
    output.push_str(&"  ".repeat(depth));
    output.push_str(icon(node.kind));
    if !label.is_empty() {
        output.push(' ');
        output.push_str(&label);
    }
    output.push('\n');
    for &child in &node.children {
        write_node(doc, child, depth + 1, label_width, output);
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Icon for a node kind.
fn icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Top => "⧉",
        NodeKind::Block => "➔",
        NodeKind::Directive => "\"",
        NodeKind::DirectiveOption | NodeKind::Field => "≔",
        NodeKind::Foot => "³",
        NodeKind::Target => "⊕",
        NodeKind::SubstDef => "∿",
        NodeKind::LineBlock => "↵",
        NodeKind::Pre => "𝒱",
        NodeKind::Section => "§",
        NodeKind::ListItem => "•",
        NodeKind::Inline => "¶",
        NodeKind::Error => "∅",
        NodeKind::Text => "◦",
        NodeKind::Emph => "𝐼",
        NodeKind::Strong => "𝐁",
        NodeKind::Literal => "ƒ",
        NodeKind::Role => "√",
        NodeKind::Link | NodeKind::LinkAnon | NodeKind::LinkRaw => "⊕",
        NodeKind::FootRef => "³",
        NodeKind::Subst => "∿",
    }
}

/// [`Format`] wrapper around [`to_treeviz`].
pub struct TreevizFormat {
    pub label_width: usize,
}

impl Default for TreevizFormat {
    fn default() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "One-line-per-node tree dump for diagnostics"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz(doc, self.label_width))
    }
}
