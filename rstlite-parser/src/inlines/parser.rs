//! Inline scanner.
//!
//! Every matcher is a pure function from the remaining text to a node and a
//! consumed byte count; the scan position strictly advances on every branch.
//! When no markup matches, the fallback looks ahead for the next place
//! markup could legally start (or a bare URL) and emits everything before it
//! as plain text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Node, NodeKind};

static QUOTED_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^`([^`]+)`(__?)").unwrap());

static NAMED_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9]+(?:[-.][A-Za-z0-9]+)*)(__?)").unwrap());

static FOOT_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[([^\[\]]+)\]_").unwrap());

static ROLE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^:([a-z0-9-]+):`([^`]*)`").unwrap());

static ROLE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^`([^`]*)`:([a-z0-9-]+):").unwrap());

static DEFAULT_ROLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^`([^`]+)`").unwrap());

static SUBST_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\|([^|\s])\|").unwrap());

static STRONG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*([^\s*][^*]*)\*\*").unwrap());

static EMPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*([^\s*][^*]*)\*").unwrap());

/// Tokenize one paragraph's text into a flat inline node sequence.
pub fn tokenize(text: &str) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut pos = 0usize;
    // A space up front makes markup legal at the very start.
    let mut last_char = ' ';

    while pos < text.len() {
        let rest = &text[pos..];

        if is_markup_boundary(last_char) {
            if let Some((node, used)) = attempt_markup(rest) {
                last_char = rest[..used].chars().next_back().unwrap_or(last_char);
                pos += used;
                push_merged(&mut nodes, node);
                continue;
            }
        }

        match find_target(rest, last_char) {
            Some((offset, Target::Url)) => {
                if offset > 0 {
                    push_merged(&mut nodes, Node::text(&rest[..offset]));
                }
                let url = capture_url(&rest[offset..]);
                last_char = url.chars().next_back().unwrap_or(last_char);
                let used = offset + url.len();
                push_merged(&mut nodes, Node::with_args(NodeKind::LinkRaw, vec![url.to_string()]));
                pos += used;
            }
            Some((offset, Target::Escape)) => {
                if offset > 0 {
                    push_merged(&mut nodes, Node::text(&rest[..offset]));
                }
                // A backslash always consumes; the literal character follows.
                if let Some((node, used)) = match_escape(&rest[offset..]) {
                    last_char = node.arg(0).chars().next_back().unwrap_or(last_char);
                    push_merged(&mut nodes, node);
                    pos += offset + used;
                } else {
                    push_merged(&mut nodes, Node::text(&rest[offset..]));
                    break;
                }
            }
            Some((0, Target::Trigger)) => {
                // Markup was legal here but nothing matched.
                nodes.push(Node::error("Invalid inline markup"));
                break;
            }
            Some((offset, _)) if offset > 0 => {
                push_merged(&mut nodes, Node::text(&rest[..offset]));
                last_char = rest[..offset].chars().next_back().unwrap();
                pos += offset;
            }
            _ => {
                push_merged(&mut nodes, Node::text(rest));
                break;
            }
        }
    }

    nodes
}

/// True when `c` legalizes a following markup start.
fn is_markup_boundary(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '\'' | '"'
                | '('
                | '['
                | '{'
                | '<'
                | '-'
                | '/'
                | ':'
                | '\u{2018}' // ‘
                | '\u{2019}' // ’
                | '\u{201C}' // “
                | '\u{201D}' // ”
                | '\u{2013}' // –
                | '\u{2014}' // —
                | '\u{00AB}' // «
                | '\u{00BB}' // »
        )
}

/// Try every markup form at the current position, in fixed order.
fn attempt_markup(rest: &str) -> Option<(Node, usize)> {
    match_escape(rest)
        .or_else(|| match_reference(rest))
        .or_else(|| match_footnote_ref(rest))
        .or_else(|| match_role(rest))
        .or_else(|| match_literal(rest))
        .or_else(|| match_default_role(rest))
        .or_else(|| match_subst_ref(rest))
        .or_else(|| match_strong(rest))
        .or_else(|| match_emph(rest))
}

/// Backslash escape: the next character is taken literally.
fn match_escape(rest: &str) -> Option<(Node, usize)> {
    let after = rest.strip_prefix('\\')?;
    match after.chars().next() {
        Some(c) => Some((Node::text(c.to_string()), 1 + c.len_utf8())),
        None => Some((Node::text("\\"), 1)),
    }
}

/// Named (`name_`) or quoted (`` `text`_ ``) hyperlink reference; a double
/// underscore marks an anonymous reference.
fn match_reference(rest: &str) -> Option<(Node, usize)> {
    if let Some(caps) = QUOTED_REF.captures(rest) {
        let kind = reference_kind(&caps[2]);
        let used = caps.get(0).unwrap().end();
        return Some((Node::with_args(kind, vec![caps[1].to_string()]), used));
    }
    let caps = NAMED_REF.captures(rest)?;
    let used = caps.get(0).unwrap().end();
    if followed_by_word(rest, used) {
        return None;
    }
    let kind = reference_kind(&caps[2]);
    Some((Node::with_args(kind, vec![caps[1].to_string()]), used))
}

fn reference_kind(underscores: &str) -> NodeKind {
    if underscores == "__" {
        NodeKind::LinkAnon
    } else {
        NodeKind::Link
    }
}

fn followed_by_word(rest: &str, at: usize) -> bool {
    rest[at..]
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// `[label]_` footnote or citation reference.
fn match_footnote_ref(rest: &str) -> Option<(Node, usize)> {
    let caps = FOOT_REF.captures(rest)?;
    let used = caps.get(0).unwrap().end();
    if followed_by_word(rest, used) {
        return None;
    }
    Some((
        Node::with_args(NodeKind::FootRef, vec![caps[1].to_string()]),
        used,
    ))
}

/// Interpreted text, prefix (`` :role:`text` ``) or suffix
/// (`` `text`:role: ``) form.
fn match_role(rest: &str) -> Option<(Node, usize)> {
    if let Some(caps) = ROLE_PREFIX.captures(rest) {
        let used = caps.get(0).unwrap().end();
        return Some((
            Node::with_args(NodeKind::Role, vec![caps[1].to_string(), caps[2].to_string()]),
            used,
        ));
    }
    let caps = ROLE_SUFFIX.captures(rest)?;
    let used = caps.get(0).unwrap().end();
    Some((
        Node::with_args(NodeKind::Role, vec![caps[2].to_string(), caps[1].to_string()]),
        used,
    ))
}

/// Double-backtick literal span. Content is taken verbatim.
fn match_literal(rest: &str) -> Option<(Node, usize)> {
    let inner = rest.strip_prefix("``")?;
    let end = inner.find("``")?;
    if end == 0 {
        return None;
    }
    Some((
        Node::with_args(NodeKind::Literal, vec![inner[..end].to_string()]),
        end + 4,
    ))
}

/// Bare backtick span: interpreted text with the default role.
fn match_default_role(rest: &str) -> Option<(Node, usize)> {
    let caps = DEFAULT_ROLE.captures(rest)?;
    let used = caps.get(0).unwrap().end();
    Some((
        Node::with_args(NodeKind::Role, vec![String::new(), caps[1].to_string()]),
        used,
    ))
}

/// Single-character substitution reference `|x|`.
fn match_subst_ref(rest: &str) -> Option<(Node, usize)> {
    let caps = SUBST_REF.captures(rest)?;
    let used = caps.get(0).unwrap().end();
    Some((
        Node::with_args(NodeKind::Subst, vec![caps[1].to_string()]),
        used,
    ))
}

/// `**strong**`: content must not start with whitespace nor contain `*`.
fn match_strong(rest: &str) -> Option<(Node, usize)> {
    let caps = STRONG.captures(rest)?;
    let used = caps.get(0).unwrap().end();
    Some((
        Node::with_args(NodeKind::Strong, vec![caps[1].to_string()]),
        used,
    ))
}

/// `*emphasis*`: same content rules as strong.
fn match_emph(rest: &str) -> Option<(Node, usize)> {
    let caps = EMPH.captures(rest)?;
    let used = caps.get(0).unwrap().end();
    Some((
        Node::with_args(NodeKind::Emph, vec![caps[1].to_string()]),
        used,
    ))
}

/// What the plain-text fallback scan is looking for.
enum Target {
    /// A bare `http(s)://` URL.
    Url,
    /// A `*` or backtick where markup could legally open.
    Trigger,
    /// A trailing-underscore word (an upcoming reference).
    RefWord,
    /// A backslash escape; legal anywhere.
    Escape,
}

/// Find the earliest position where something other than plain text could
/// begin. Apart from escapes, only positions right after a markup boundary
/// qualify.
fn find_target(rest: &str, last_char: char) -> Option<(usize, Target)> {
    let mut prev = last_char;
    for (j, ch) in rest.char_indices() {
        if ch == '\\' {
            return Some((j, Target::Escape));
        }
        if is_markup_boundary(prev) {
            let tail = &rest[j..];
            if tail.starts_with("http://") || tail.starts_with("https://") {
                return Some((j, Target::Url));
            }
            if ch == '*' || ch == '`' {
                return Some((j, Target::Trigger));
            }
            if ch.is_ascii_alphanumeric() && ref_word_at(tail) {
                return Some((j, Target::RefWord));
            }
        }
        prev = ch;
    }
    None
}

fn ref_word_at(tail: &str) -> bool {
    NAMED_REF
        .captures(tail)
        .is_some_and(|caps| !followed_by_word(tail, caps.get(0).unwrap().end()))
}

/// Take the URL run: everything up to whitespace or a double quote, minus
/// trailing terminal punctuation.
fn capture_url(rest: &str) -> &str {
    let end = rest
        .find(|c: char| c.is_whitespace() || c == '"')
        .unwrap_or(rest.len());
    rest[..end].trim_end_matches(['.', ',', '?', '!', ';', ':', ')'])
}

/// Append a node, merging adjacent plain-text runs.
fn push_merged(nodes: &mut Vec<Node>, node: Node) {
    if node.kind == NodeKind::Text {
        if node.arg(0).is_empty() {
            return;
        }
        if let Some(last) = nodes.last_mut() {
            if last.kind == NodeKind::Text {
                let addition = node.args.into_iter().next().unwrap();
                last.args[0].push_str(&addition);
                return;
            }
        }
    }
    nodes.push(node);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(nodes: &[Node]) -> Vec<NodeKind> {
        nodes.iter().map(|n| n.kind).collect()
    }

    #[test]
    fn plain_text_passes_through() {
        let nodes = tokenize("just ordinary words.");
        assert_eq!(nodes, vec![Node::text("just ordinary words.")]);
    }

    #[test]
    fn emphasis_needs_a_boundary() {
        // Inside a word the asterisks stay literal.
        let nodes = tokenize("a*b*c");
        assert_eq!(nodes, vec![Node::text("a*b*c")]);

        let nodes = tokenize("a *b* c");
        assert_eq!(kinds(&nodes), vec![NodeKind::Text, NodeKind::Emph, NodeKind::Text]);
        assert_eq!(nodes[1].arg(0), "b");
    }

    #[test]
    fn strong_and_emphasis() {
        let nodes = tokenize("**bold** and *soft*");
        assert_eq!(
            kinds(&nodes),
            vec![NodeKind::Strong, NodeKind::Text, NodeKind::Emph]
        );
        assert_eq!(nodes[0].arg(0), "bold");
        assert_eq!(nodes[2].arg(0), "soft");
    }

    #[test]
    fn emphasis_must_not_start_with_whitespace() {
        let nodes = tokenize("* spaced*");
        assert_eq!(kinds(&nodes), vec![NodeKind::Error]);
    }

    #[test]
    fn unclosed_markup_is_an_error() {
        let nodes = tokenize("before `unclosed");
        assert_eq!(kinds(&nodes), vec![NodeKind::Text, NodeKind::Error]);
        assert_eq!(nodes[0].arg(0), "before ");
    }

    #[test]
    fn literal_span_keeps_content_verbatim() {
        let nodes = tokenize("``x = a*b``");
        assert_eq!(nodes, vec![Node::with_args(NodeKind::Literal, vec!["x = a*b".into()])]);
    }

    #[test]
    fn roles_in_both_forms() {
        let nodes = tokenize(":math:`x^2`");
        assert_eq!(
            nodes,
            vec![Node::with_args(NodeKind::Role, vec!["math".into(), "x^2".into()])]
        );

        let nodes = tokenize("`x^2`:math:");
        assert_eq!(
            nodes,
            vec![Node::with_args(NodeKind::Role, vec!["math".into(), "x^2".into()])]
        );
    }

    #[test]
    fn default_role_has_empty_name() {
        let nodes = tokenize("`title`");
        assert_eq!(
            nodes,
            vec![Node::with_args(NodeKind::Role, vec!["".into(), "title".into()])]
        );
    }

    #[test]
    fn named_and_anonymous_references() {
        let nodes = tokenize("see target_ now");
        assert_eq!(kinds(&nodes), vec![NodeKind::Text, NodeKind::Link, NodeKind::Text]);
        assert_eq!(nodes[1].arg(0), "target");

        let nodes = tokenize("see target__ now");
        assert_eq!(nodes[1].kind, NodeKind::LinkAnon);
    }

    #[test]
    fn quoted_reference_keeps_embedded_url() {
        let nodes = tokenize("`Example <http://x>`_");
        assert_eq!(
            nodes,
            vec![Node::with_args(NodeKind::Link, vec!["Example <http://x>".into()])]
        );
    }

    #[test]
    fn underscore_inside_word_is_not_a_reference() {
        let nodes = tokenize("snake_case stays");
        assert_eq!(nodes, vec![Node::text("snake_case stays")]);
    }

    #[test]
    fn footnote_and_substitution_references() {
        let nodes = tokenize("[1]_ begins");
        assert_eq!(kinds(&nodes), vec![NodeKind::FootRef, NodeKind::Text]);
        assert_eq!(nodes[0].arg(0), "1");

        let nodes = tokenize("|x| begins");
        assert_eq!(kinds(&nodes), vec![NodeKind::Subst, NodeKind::Text]);
    }

    #[test]
    fn bare_urls_become_links() {
        let nodes = tokenize("read http://example.com/x, then rest");
        assert_eq!(
            kinds(&nodes),
            vec![NodeKind::Text, NodeKind::LinkRaw, NodeKind::Text]
        );
        assert_eq!(nodes[1].arg(0), "http://example.com/x");
        assert_eq!(nodes[2].arg(0), ", then rest");
    }

    #[test]
    fn escapes_take_the_next_character_literally() {
        let nodes = tokenize("\\*not markup\\*");
        assert_eq!(nodes, vec![Node::text("*not markup*")]);
    }

    #[test]
    fn empty_input_yields_no_nodes() {
        assert!(tokenize("").is_empty());
    }
}
