//! Literal blocks introduced by a trailing `::`.

mod common;

use common::{paragraph_text, root_child, root_kinds};
use rstlite_parser::{parse, NodeKind};

#[test]
fn trailing_marker_folds_to_one_colon() {
    let doc = parse("Example::\n\n    print('hi')");
    assert_eq!(root_kinds(&doc), vec![NodeKind::Inline, NodeKind::Pre]);
    assert_eq!(paragraph_text(&doc, root_child(&doc, 0)), "Example:");
    assert_eq!(doc.node(root_child(&doc, 1)).arg(0), "print('hi')");
}

#[test]
fn block_keeps_relative_indentation() {
    let doc = parse("Code::\n\n    line1\n      line2\n\nAfter");
    assert_eq!(
        root_kinds(&doc),
        vec![NodeKind::Inline, NodeKind::Pre, NodeKind::Inline]
    );
    assert_eq!(doc.node(root_child(&doc, 1)).arg(0), "line1\n  line2");
}

#[test]
fn deeply_indented_block_is_rebased() {
    // The block's own minimum indentation is subtracted, whatever it was.
    let doc = parse("Code::\n\n          x\n            y");
    assert_eq!(doc.node(root_child(&doc, 1)).arg(0), "x\n  y");
}

#[test]
fn mid_paragraph_marker_folds_into_the_running_paragraph() {
    let doc = parse("A paragraph\nthat ends in::\n\n    code");
    assert_eq!(root_kinds(&doc), vec![NodeKind::Inline, NodeKind::Pre]);
    assert_eq!(
        paragraph_text(&doc, root_child(&doc, 0)),
        "A paragraph that ends in:"
    );
    assert_eq!(doc.node(root_child(&doc, 1)).arg(0), "code");
}

#[test]
fn bare_marker_produces_only_the_block() {
    let doc = parse("::\n\n    verbatim");
    assert_eq!(root_kinds(&doc), vec![NodeKind::Pre]);
    assert_eq!(doc.node(root_child(&doc, 0)).arg(0), "verbatim");
}

#[test]
fn marker_without_blank_line_stays_text() {
    let doc = parse("Example::\nmore text");
    assert_eq!(root_kinds(&doc), vec![NodeKind::Inline]);
    assert_eq!(
        paragraph_text(&doc, root_child(&doc, 0)),
        "Example:: more text"
    );
}

#[test]
fn blank_lines_inside_the_block_are_kept() {
    let doc = parse("Code::\n\n    a\n\n    b");
    assert_eq!(doc.node(root_child(&doc, 1)).arg(0), "a\n\nb");
}

#[test]
fn markup_inside_the_block_is_not_tokenized() {
    let doc = parse("Code::\n\n    *not emphasis*");
    let pre = doc.node(root_child(&doc, 1));
    assert_eq!(pre.kind, NodeKind::Pre);
    assert_eq!(pre.arg(0), "*not emphasis*");
    assert!(pre.children.is_empty());
}
