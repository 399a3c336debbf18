//! Tree-walking HTML serializer.
//!
//! One render arm per node kind, depth first; kinds with no HTML
//! counterpart render nothing rather than failing. Literal text is escaped
//! exactly once, at the leaves. Consecutive list-item siblings are grouped
//! into a single `<ol>` by looking at the neighbouring siblings while
//! walking; the tree itself stores no list container.

use super::HtmlOptions;
use rstlite_parser::{Document, NodeId, NodeKind};

/// Replace `& < > "` with their entity equivalents.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serialize a document tree to an HTML fragment wrapped in a single
/// container `<div>`.
pub fn serialize_to_html(doc: &Document, options: &HtmlOptions) -> String {
    let mut serializer = HtmlSerializer {
        doc,
        options,
        output: String::new(),
    };
    serializer.write_document();
    serializer.output
}

struct HtmlSerializer<'a> {
    doc: &'a Document,
    options: &'a HtmlOptions,
    output: String,
}

impl HtmlSerializer<'_> {
    fn write_document(&mut self) {
        self.output
            .push_str(&format!("<div class=\"{}\">\n", escape(&self.options.document_class)));
        self.write_children(self.doc.root());
        self.output.push_str("</div>\n");
        log::trace!("serialized {} bytes of html", self.output.len());
    }

    /// Render a node's children in order, wrapping runs of consecutive
    /// list items in one ordered list.
    fn write_children(&mut self, parent: NodeId) {
        let children = self.doc.children(parent);
        for (index, &id) in children.iter().enumerate() {
            let is_item = self.doc.node(id).kind == NodeKind::ListItem;
            if is_item {
                let follows_item = index > 0
                    && self.doc.node(children[index - 1]).kind == NodeKind::ListItem;
                if !follows_item {
                    self.output.push_str("<ol>\n");
                }
            }
            self.write_node(id);
            if is_item {
                let item_follows = children
                    .get(index + 1)
                    .is_some_and(|&next| self.doc.node(next).kind == NodeKind::ListItem);
                if !item_follows {
                    self.output.push_str("</ol>\n");
                }
            }
        }
    }

    fn write_node(&mut self, id: NodeId) {
        let node = self.doc.node(id);
        match node.kind {
            NodeKind::Top => self.write_children(id),
            NodeKind::Block => {
                self.output.push_str("<blockquote>\n");
                self.write_children(id);
                self.output.push_str("</blockquote>\n");
            }
            NodeKind::Inline => {
                self.output.push_str("<p>");
                for &child in &node.children {
                    self.write_inline(child);
                }
                self.output.push_str("</p>\n");
            }
            NodeKind::Section => {
                let level = self.options.heading_level.clamp(1, 6);
                self.output.push_str(&format!(
                    "<h{level}>{}</h{level}>\n",
                    escape(node.arg(0))
                ));
            }
            NodeKind::Pre => {
                self.output
                    .push_str(&format!("<pre>{}</pre>\n", escape(node.arg(0))));
            }
            NodeKind::ListItem => {
                self.output.push_str("<li>");
                self.write_children(id);
                self.output.push_str("</li>\n");
            }
            NodeKind::LineBlock => {
                self.output.push_str("<div class=\"line-block\">\n");
                for line in &node.args {
                    self.output
                        .push_str(&format!("<div class=\"line\">{}</div>\n", escape(line)));
                }
                self.output.push_str("</div>\n");
            }
            NodeKind::Directive => {
                // The name is safe in an attribute by construction, but is
                // escaped like everything else.
                let name = escape(node.arg(0));
                let argument = node.arg(1).trim().to_string();
                self.output
                    .push_str(&format!("<div class=\"directive directive-{name}\">\n"));
                if !argument.is_empty() {
                    self.output.push_str(&format!(
                        "<p class=\"directive-arg\">{}</p>\n",
                        escape(&argument)
                    ));
                }
                self.write_children(id);
                self.output.push_str("</div>\n");
            }
            NodeKind::Foot => {
                // Placeholder label; back-references are not resolved.
                self.output.push_str(&format!(
                    "<div class=\"footnote\"><span class=\"footnote-label\">[{}]</span>\n",
                    escape(node.arg(0))
                ));
                self.write_children(id);
                self.output.push_str("</div>\n");
            }
            NodeKind::Error => {
                self.output.push_str(&format!(
                    "<span class=\"system-message\">{}</span>\n",
                    escape(node.arg(0))
                ));
            }
            // Metadata with no HTML counterpart.
            NodeKind::Target
            | NodeKind::SubstDef
            | NodeKind::DirectiveOption
            | NodeKind::Field => {}
            // Inline leaves reached as block content render nothing.
            _ => {}
        }
    }

    fn write_inline(&mut self, id: NodeId) {
        let node = self.doc.node(id);
        match node.kind {
            NodeKind::Text => self.output.push_str(&escape(node.arg(0))),
            NodeKind::Emph => {
                self.output
                    .push_str(&format!("<em>{}</em>", escape(node.arg(0))));
            }
            NodeKind::Strong => {
                self.output
                    .push_str(&format!("<strong>{}</strong>", escape(node.arg(0))));
            }
            NodeKind::Literal => {
                self.output
                    .push_str(&format!("<code>{}</code>", escape(node.arg(0))));
            }
            NodeKind::Role => {
                let name = node.arg(0);
                let text = escape(node.arg(1));
                if name.is_empty() {
                    // Default role.
                    self.output.push_str(&format!("<cite>{text}</cite>"));
                } else {
                    self.output
                        .push_str(&format!("<span class=\"role-{}\">{text}</span>", escape(name)));
                }
            }
            NodeKind::Link | NodeKind::LinkAnon => {
                self.write_reference(node.arg(0));
            }
            NodeKind::LinkRaw => {
                let url = escape(node.arg(0));
                self.output
                    .push_str(&format!("<a href=\"{url}\">{url}</a>"));
            }
            NodeKind::FootRef => {
                self.output.push_str(&format!(
                    "<sup class=\"footnote-reference\">[{}]</sup>",
                    escape(node.arg(0))
                ));
            }
            NodeKind::Subst => {
                self.output.push_str(&format!(
                    "<span class=\"substitution-reference\">|{}|</span>",
                    escape(node.arg(0))
                ));
            }
            NodeKind::Error => {
                self.output.push_str(&format!(
                    "<span class=\"system-message\">{}</span>",
                    escape(node.arg(0))
                ));
            }
            _ => {}
        }
    }

    /// A reference's captured text may end in an embedded `<url>` target;
    /// without one the anchor is a placeholder (target resolution is out of
    /// scope here).
    fn write_reference(&mut self, raw: &str) {
        if let Some(stripped) = raw.strip_suffix('>') {
            if let Some(open) = stripped.rfind('<') {
                let text = stripped[..open].trim_end();
                let url = &stripped[open + 1..];
                if !url.is_empty() {
                    let display = if text.is_empty() { url } else { text };
                    self.output.push_str(&format!(
                        "<a href=\"{}\">{}</a>",
                        escape(url),
                        escape(display)
                    ));
                    return;
                }
            }
        }
        self.output
            .push_str(&format!("<a href=\"#\">{}</a>", escape(raw)));
    }
}
