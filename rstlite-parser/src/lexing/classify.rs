//! Pure per-construct line matchers.
//!
//! Each matcher is a total function from the stripped line text to parsed
//! captures. Regexes are compiled once; matchers keep no state between
//! calls, so the tokenizer can re-run them freely while reprocessing a
//! rewritten line.

use once_cell::sync::Lazy;
use regex::Regex;

static DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.\.\s+([a-z0-9-]+)::(.*)$").unwrap());

static FIELD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^:([a-z0-9-]+):([^:].*)?$").unwrap());

static FOOTNOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\.\.\s+\[(.+)\](\s.*)?$").unwrap());

static TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.\.\s+_([a-zA-Z0-9.-]+):\s+(.*)$").unwrap());

static ANON_TARGET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^__\s+(.*)$").unwrap());

static SUBST_DEF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.\.\s+\|([^|\s][^|]*)\|\s*(.*)$").unwrap());

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\.\.\s").unwrap());

static LINE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\|(.*)$").unwrap());

static LIST_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-|\*|\+|•|#|[a-z0-9]+\.|[a-z0-9]+\)|\([a-z0-9]+\))(?:(\s+)(.*))?$").unwrap()
});

/// Characters a section underline may repeat.
const UNDERLINE_CHARS: &[char] = &['-', '=', '+', '^', '#', '*'];

/// `.. name:: argument` header. Returns the directive name and its trimmed
/// inline argument.
pub fn match_directive(text: &str) -> Option<(String, String)> {
    let caps = DIRECTIVE.captures(text)?;
    Some((caps[1].to_string(), caps[2].trim().to_string()))
}

/// `:name: value` field line. The value is absent for a bare `:name:`.
pub fn match_field(text: &str) -> Option<(String, Option<String>)> {
    let caps = FIELD.captures(text)?;
    let value = caps.get(2).map(|m| m.as_str().trim().to_string());
    Some((caps[1].to_string(), value))
}

/// `.. [label] text` footnote or citation definition.
pub fn match_footnote(text: &str) -> Option<(String, Option<String>)> {
    let caps = FOOTNOTE.captures(text)?;
    let rest = caps
        .get(2)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty());
    Some((caps[1].to_string(), rest))
}

/// `.. _name: value` link target.
pub fn match_target(text: &str) -> Option<(String, String)> {
    let caps = TARGET.captures(text)?;
    Some((caps[1].to_string(), caps[2].trim().to_string()))
}

/// `__ value` anonymous link target.
pub fn match_anonymous_target(text: &str) -> Option<String> {
    let caps = ANON_TARGET.captures(text)?;
    Some(caps[1].trim().to_string())
}

/// `.. |name| value` substitution definition.
pub fn match_substitution_def(text: &str) -> Option<(String, Option<String>)> {
    let caps = SUBST_DEF.captures(text)?;
    let value = Some(caps[2].trim().to_string()).filter(|s| !s.is_empty());
    Some((caps[1].to_string(), value))
}

/// `.. ` explicit markup with no further structured match: a comment.
pub fn is_comment(text: &str) -> bool {
    COMMENT.is_match(text)
}

/// Result of matching a `| ...` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineBlockMatch {
    /// A well-formed entry; carries the entry text.
    Entry(String),
    /// The bar is not followed by whitespace.
    Invalid,
}

/// `| text` line-block entry. The content must be separated from the bar by
/// whitespace; anything else is an invalid entry.
pub fn match_line_block(text: &str) -> Option<LineBlockMatch> {
    let caps = LINE_BLOCK.captures(text)?;
    let content = &caps[1];
    if content.starts_with(char::is_whitespace) {
        Some(LineBlockMatch::Entry(content.trim().to_string()))
    } else {
        Some(LineBlockMatch::Invalid)
    }
}

/// A line ending in `::`. Returns the text before the marker (possibly
/// empty); the caller decides whether the following line makes this a
/// literal block trigger.
pub fn literal_trigger(text: &str) -> Option<&str> {
    text.strip_suffix("::")
}

/// A run of one repeated underline character. Runs of two are reported so
/// the caller can flag an underline that is too short for its title; only
/// runs of three or more form a section.
pub fn underline(text: &str) -> Option<(char, usize)> {
    let mut chars = text.chars();
    let first = chars.next()?;
    if !UNDERLINE_CHARS.contains(&first) {
        return None;
    }
    if !chars.all(|c| c == first) {
        return None;
    }
    let len = text.chars().count();
    if len < 2 {
        return None;
    }
    Some((first, len))
}

/// A matched list-item marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker {
    /// The marker text as written (`-`, `#`, `3.`, `(a)`, ...).
    pub marker: String,
    /// On-screen width of the marker plus its separating whitespace; the
    /// item content is indented by this much relative to the marker.
    pub width: usize,
    /// Line text after the marker, empty when the marker ends the line.
    pub rest: String,
}

/// Bullet (`- * + •`), `#`, or enumerated (`n.` `n)` `(n)`) list marker
/// followed by whitespace or end of line.
pub fn match_list_item(text: &str) -> Option<ListMarker> {
    let caps = LIST_ITEM.captures(text)?;
    let marker = caps[1].to_string();
    let gap = caps.get(2).map(|m| m.as_str().chars().count()).unwrap_or(0);
    let rest = caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default();
    let width = marker.chars().count() + gap;
    Some(ListMarker { marker, width, rest })
}
