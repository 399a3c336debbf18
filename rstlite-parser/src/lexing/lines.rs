//! Line normalization: raw source to (indent, text) pairs.

/// One physical input line after whitespace-prefix removal.
///
/// A blank line has `text == ""`; its `indent` value carries no meaning and
/// must not be relied upon.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Line {
    pub indent: usize,
    pub text: String,
}

/// Split raw source into ordered lines, stripping the leading whitespace run
/// of each line and recording its character count as the indent. Trailing
/// whitespace is trimmed. Produces exactly one [`Line`] per physical input
/// line and always succeeds.
pub fn normalize(source: &str) -> Vec<Line> {
    let lines: Vec<Line> = source
        .split('\n')
        .map(|raw| {
            let indent = raw.chars().take_while(|c| c.is_whitespace()).count();
            let text = raw.trim().to_string();
            Line { indent, text }
        })
        .collect();
    log::trace!("normalized {} input lines", lines.len());
    lines
}
