//! Shared helpers for the element test files.
#![allow(dead_code)]

use rstlite_parser::{Document, NodeId, NodeKind};

/// Kinds of the document root's direct children.
pub fn root_kinds(doc: &Document) -> Vec<NodeKind> {
    doc.children(doc.root())
        .iter()
        .map(|&id| doc.node(id).kind)
        .collect()
}

/// The `index`-th child of `parent`.
pub fn child(doc: &Document, parent: NodeId, index: usize) -> NodeId {
    doc.children(parent)[index]
}

/// The `index`-th child of the root.
pub fn root_child(doc: &Document, index: usize) -> NodeId {
    child(doc, doc.root(), index)
}

/// Flattened text of a paragraph's inline children.
pub fn paragraph_text(doc: &Document, id: NodeId) -> String {
    doc.children(id)
        .iter()
        .map(|&c| doc.node(c).arg(0))
        .collect::<Vec<_>>()
        .concat()
}

/// Kinds of a node's direct children.
pub fn child_kinds(doc: &Document, id: NodeId) -> Vec<NodeKind> {
    doc.children(id)
        .iter()
        .map(|&c| doc.node(c).kind)
        .collect()
}
