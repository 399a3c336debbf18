//! Per-element rendering.

use rstlite_babel::render;

#[test]
fn emphasis_and_strong() {
    let html = render("*soft* and **hard**");
    assert!(html.contains("<em>soft</em>"));
    assert!(html.contains("<strong>hard</strong>"));
}

#[test]
fn roles_render_as_spans() {
    // Suffix form; the prefix form at line start is a field line instead.
    let html = render("`x + y`:math:");
    assert!(html.contains("<span class=\"role-math\">x + y</span>"));
}

#[test]
fn role_prefix_form_works_inside_a_footnote_body() {
    let html = render(".. [1] :math:`x + y` holds");
    assert!(html.contains("<span class=\"role-math\">x + y</span>"));
}

#[test]
fn default_role_renders_as_cite() {
    let html = render("`The Title`");
    assert!(html.contains("<cite>The Title</cite>"));
}

#[test]
fn bare_urls_are_linked() {
    let html = render("see http://example.com/a now");
    assert!(html.contains("<a href=\"http://example.com/a\">http://example.com/a</a>"));
}

#[test]
fn bare_reference_renders_a_placeholder_anchor() {
    let html = render("target_");
    assert!(html.contains("<a href=\"#\">target</a>"));
}

#[test]
fn footnote_reference_is_a_marker() {
    let html = render("[1]_ says so");
    assert!(html.contains("<sup class=\"footnote-reference\">[1]</sup>"));
}

#[test]
fn substitution_reference_is_a_placeholder() {
    // At line start a bar opens a line block, so the reference sits inside
    // a footnote body.
    let html = render(".. [1] |x| marks the spot");
    assert!(html.contains("<span class=\"substitution-reference\">|x|</span>"));
}

#[test]
fn footnote_definition_renders_label_and_body() {
    let html = render(".. [note] The body.");
    assert!(html.contains("<span class=\"footnote-label\">[note]</span>"));
    assert!(html.contains("<p>The body.</p>"));
}

#[test]
fn directive_renders_name_class_and_argument() {
    let html = render(".. warning:: Mind the gap");
    assert!(html.contains("<div class=\"directive directive-warning\">"));
    assert!(html.contains("<p class=\"directive-arg\">Mind the gap</p>"));
}

#[test]
fn directive_options_render_nothing() {
    let html = render(".. image:: pic.png\n   :width: 120");
    assert!(!html.contains("width"));
    assert!(!html.contains("120"));
}

#[test]
fn line_block_keeps_line_breaks() {
    let html = render("| roses are red\n| violets are blue");
    assert!(html.contains("<div class=\"line\">roses are red</div>"));
    assert!(html.contains("<div class=\"line\">violets are blue</div>"));
}

#[test]
fn indented_block_renders_as_blockquote() {
    let html = render("top\n\n    quoted");
    assert!(html.contains("<blockquote>\n<p>quoted</p>\n</blockquote>"));
}

#[test]
fn targets_and_substitution_definitions_are_silent() {
    let html = render(".. _home: http://example.com\n.. |mark| replace:: X");
    assert_eq!(html, "<div class=\"rst-document\">\n</div>\n");
}

#[test]
fn structural_errors_render_flagged_spans() {
    let html = render("A long title\n----");
    assert!(html.contains("<span class=\"system-message\">Title underline wrong</span>"));
}

#[test]
fn inline_errors_render_flagged_spans() {
    let html = render("broken ` tick");
    assert!(html.contains("<span class=\"system-message\">Invalid inline markup</span>"));
}
