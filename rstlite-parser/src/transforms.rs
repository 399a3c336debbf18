//! Pipeline stages and the standard source-to-document transform.
//!
//!     The standard pipeline is:
//!
//!     1. [`lexing::normalize`]: source text to (indent, text) lines;
//!     2. [`parsing::tokenize`]: lines to a block tree;
//!     3. [`expand_inlines`]: every paragraph's raw text to inline nodes.
//!
//!     Each stage is usable on its own; [`parse`] composes them for the
//!     common case.

use std::collections::VecDeque;

use crate::ast::{Document, NodeKind};
use crate::{inlines, lexing, parsing};

/// Run the full pipeline: source text to a finished document tree.
pub fn parse(source: &str) -> Document {
    let lines = lexing::normalize(source);
    let mut doc = parsing::tokenize(&lines);
    expand_inlines(&mut doc);
    log::debug!("parsed {} bytes into {} nodes", source.len(), doc.len());
    doc
}

/// Replace every paragraph node's raw text with its inline token sequence.
///
/// Walks the tree with an explicit worklist seeded with the root; a visited
/// node's children are prepended in document order, so a node's own content
/// is handled before its descendants. Each paragraph transitions exactly
/// once: its raw text is drained and the tokenized nodes become its
/// children.
pub fn expand_inlines(doc: &mut Document) {
    let mut worklist: VecDeque<_> = VecDeque::from([doc.root()]);
    while let Some(id) = worklist.pop_front() {
        if doc.node(id).kind == NodeKind::Inline && doc.node(id).children.is_empty() {
            let raw = doc.node_mut(id).args.drain(..).collect::<Vec<_>>().join(" ");
            let tokens = inlines::tokenize(&raw);
            let children: Vec<_> = tokens.into_iter().map(|node| doc.alloc(node)).collect();
            doc.node_mut(id).children = children;
        }
        for &child in doc.node(id).children.iter().rev() {
            worklist.push_front(child);
        }
    }
}
