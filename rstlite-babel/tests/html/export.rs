//! End-to-end HTML export tests.

use rstlite_babel::{render, render_with_options, HtmlOptions};

#[test]
fn fragment_is_wrapped_in_one_container() {
    let html = render("Some text.");
    assert!(html.starts_with("<div class=\"rst-document\">\n"));
    assert!(html.ends_with("</div>\n"));
}

#[test]
fn empty_input_renders_an_empty_wrapper() {
    assert_eq!(render(""), "<div class=\"rst-document\">\n</div>\n");
}

#[test]
fn literal_text_is_escaped() {
    let html = render("2 < 3 & 4 > 1");
    assert!(html.contains("2 &lt; 3 &amp; 4 &gt; 1"));
    assert!(!html.contains("2 < 3"));
}

#[test]
fn script_tags_cannot_pass_through() {
    let html = render("<script>alert(1)</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn consecutive_list_items_share_one_ordered_list() {
    let html = render("- a\n- b\n- c");
    assert_eq!(html.matches("<ol>").count(), 1);
    assert_eq!(html.matches("</ol>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 3);
}

#[test]
fn separated_lists_get_separate_wrappers() {
    let html = render("- a\n\nbetween\n\n- b");
    assert_eq!(html.matches("<ol>").count(), 2);
}

#[test]
fn sections_render_at_the_configured_level() {
    let html = render("Title\n=====");
    assert!(html.contains("<h2>Title</h2>"));

    let options = HtmlOptions {
        heading_level: 3,
        ..HtmlOptions::default()
    };
    let html = render_with_options("Title\n=====", &options);
    assert!(html.contains("<h3>Title</h3>"));
}

#[test]
fn every_section_renders_at_the_same_level() {
    let html = render("One\n===\n\nTwo\n---");
    assert_eq!(html.matches("<h2>").count(), 2);
}

#[test]
fn reference_with_embedded_target() {
    let html = render("`Example <http://x>`_");
    assert!(html.contains("<a href=\"http://x\">Example</a>"));
}

#[test]
fn literal_block_renders_preformatted() {
    let html = render("Example::\n\n    a < b");
    assert!(html.contains("<p>Example:</p>"));
    assert!(html.contains("<pre>a &lt; b</pre>"));
}

#[test]
fn wrapper_class_is_configurable() {
    let options = HtmlOptions {
        document_class: "preview".to_string(),
        ..HtmlOptions::default()
    };
    let html = render_with_options("x", &options);
    assert!(html.starts_with("<div class=\"preview\">\n"));
}

#[test]
fn kitchen_sink_renders_every_construct() {
    let source = "\
Title
=====

Intro with *emphasis* and ``code``.

- one
- two

.. note:: Careful

Block::

    verbatim <text>

| first line
| second line

.. [1] A footnote.
.. _target: http://example.com";
    let html = render(source);
    assert!(html.contains("<h2>Title</h2>"));
    assert!(html.contains("<em>emphasis</em>"));
    assert!(html.contains("<code>code</code>"));
    assert_eq!(html.matches("<li>").count(), 2);
    assert!(html.contains("directive-note"));
    assert!(html.contains("<pre>verbatim &lt;text&gt;</pre>"));
    assert!(html.contains("<div class=\"line-block\">"));
    assert!(html.contains("footnote-label"));
    // Targets render to nothing.
    assert!(!html.contains("example.com"));
}
