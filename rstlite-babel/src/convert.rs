//! Formatter selection and dispatch.
//!
//! Text may open with a `#plain`, `#rst` or `#markdown` directive choosing
//! its own formatter; otherwise the caller's default applies. Unknown or
//! unavailable formats fall back to `plain`, which accepts anything.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FormatError;
use crate::formats::html::HtmlOptions;
use crate::formats::{markdown, plain};

static FORMAT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#(plain|rst|markdown)\s").unwrap());

/// The input formatters [`convert`] can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatName {
    Plain,
    Rst,
    Markdown,
}

impl FromStr for FormatName {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(FormatName::Plain),
            "rst" => Ok(FormatName::Rst),
            "markdown" => Ok(FormatName::Markdown),
            other => Err(FormatError::FormatNotFound(other.to_string())),
        }
    }
}

impl fmt::Display for FormatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatName::Plain => "plain",
            FormatName::Rst => "rst",
            FormatName::Markdown => "markdown",
        };
        write!(f, "{}", name)
    }
}

/// Determine the formatter requested by the text itself.
///
/// Returns the formatter named by a leading `#format` directive (with the
/// directive removed from the returned text), or nothing when the text does
/// not choose one.
pub fn determine(text: &str) -> (Option<FormatName>, &str) {
    match FORMAT_RE.captures(text) {
        Some(caps) => {
            let name = caps[1].parse().ok();
            let end = caps.get(0).unwrap().end();
            (name, &text[end..])
        }
        None => (None, text),
    }
}

/// Convert text to HTML.
///
/// `format` forces a formatter; otherwise a leading `#format` directive in
/// the text is honored, and `default` applies when the text does not choose.
pub fn convert(
    text: &str,
    format: Option<FormatName>,
    default: FormatName,
    options: &HtmlOptions,
) -> String {
    let (format, text) = match format {
        Some(format) => (format, text),
        None => {
            let (found, remainder) = determine(text);
            (found.unwrap_or(default), remainder)
        }
    };
    log::debug!("converting {} bytes as {}", text.len(), format);
    match format {
        FormatName::Rst => crate::render_with_options(text, options),
        FormatName::Plain => plain::format_plain(text),
        FormatName::Markdown => markdown::to_html(text),
    }
}
