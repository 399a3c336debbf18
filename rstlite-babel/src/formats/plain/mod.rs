//! Nearly-plain text formatter.
//!
//! The simplest of the formatters: an empty line is a paragraph break, four
//! spaces in front of a line make it `<pre>` text, and bare links become
//! anchors. Everything is escaped up front.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::formats::html::escape;

static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(https?://[^\s"]*[^\s".,?!])"#).unwrap());

/// Convert nearly-plain text to HTML.
pub fn format_plain(text: &str) -> String {
    let escaped = escape(text);
    let mut parts: Vec<String> = Vec::new();
    let mut in_pre = false;

    for line in escaped.split('\n') {
        if line.is_empty() {
            if in_pre {
                parts.push(String::new());
            } else {
                parts.push("</p>\n<p>".to_string());
            }
        } else if let Some(rest) = line.strip_prefix("    ") {
            if in_pre {
                parts.push(rest.to_string());
            } else {
                in_pre = true;
                parts.push(format!("<pre>{rest}"));
            }
        } else {
            let part = if in_pre {
                format!("</pre>{line}")
            } else {
                line.to_string()
            };
            in_pre = false;
            parts.push(anchor_links(&part));
        }
    }
    if in_pre {
        parts.push("</pre>".to_string());
    }

    format!("<p>{}</p>", parts.join("\n"))
}

fn anchor_links(text: &str) -> String {
    LINK.replace_all(text, "<a href=\"$1\">$1</a>").into_owned()
}
