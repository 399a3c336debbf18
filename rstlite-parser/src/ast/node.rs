//! Arena node storage for the document tree.
//!
//! Every node carries a kind from a closed set, an ordered argument list
//! whose meaning depends on the kind, and an ordered child list. Block and
//! inline nodes share the same representation; inline leaves simply never
//! have children.

use std::fmt;

/// Handle to a node stored in a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Index of the node inside its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The closed set of node kinds.
///
/// Block-level kinds come first, inline leaf kinds after. No other kind is
/// ever constructed; consumers dispatch with an exhaustive match and treat
/// anything they do not recognize as a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Document root.
    Top,
    /// Anonymous indented block.
    Block,
    /// Explicit markup block `.. name:: arg`.
    Directive,
    /// `:name: value` immediately after a directive.
    DirectiveOption,
    /// `:name: value` anywhere else.
    Field,
    /// Footnote or citation definition `.. [label] text`.
    Foot,
    /// Link target `.. _name: value` or anonymous `__ value`.
    Target,
    /// Substitution definition `.. |name| value`.
    SubstDef,
    /// Line block built from `| text` entries, one argument per line.
    LineBlock,
    /// Literal block captured verbatim after a trailing `::`.
    Pre,
    /// Heading: args are the title text and the underline character.
    Section,
    /// One list item; consecutive siblings form one list at render time.
    ListItem,
    /// Paragraph. Carries raw text in args until inline expansion moves the
    /// tokenized content into children.
    Inline,
    /// Recovered structural or inline anomaly; args hold the message.
    Error,

    /// Plain text run.
    Text,
    /// `*emphasis*`.
    Emph,
    /// `**strong**`.
    Strong,
    /// Double-backtick literal span.
    Literal,
    /// Interpreted text; args are the role name (empty for the default
    /// role) and the span text.
    Role,
    /// Named or quoted hyperlink reference ending in `_`.
    Link,
    /// Anonymous hyperlink reference ending in `__`.
    LinkAnon,
    /// Bare URL picked up from running text.
    LinkRaw,
    /// Footnote or citation reference `[label]_`.
    FootRef,
    /// Substitution reference `|x|`.
    Subst,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Top => "top",
            NodeKind::Block => "block",
            NodeKind::Directive => "directive",
            NodeKind::DirectiveOption => "directive-option",
            NodeKind::Field => "field",
            NodeKind::Foot => "foot",
            NodeKind::Target => "target",
            NodeKind::SubstDef => "subst-def",
            NodeKind::LineBlock => "line-block",
            NodeKind::Pre => "pre",
            NodeKind::Section => "section",
            NodeKind::ListItem => "list-item",
            NodeKind::Inline => "inline",
            NodeKind::Error => "error",
            NodeKind::Text => "text",
            NodeKind::Emph => "emph",
            NodeKind::Strong => "strong",
            NodeKind::Literal => "literal",
            NodeKind::Role => "role",
            NodeKind::Link => "link",
            NodeKind::LinkAnon => "link-anon",
            NodeKind::LinkRaw => "link-raw",
            NodeKind::FootRef => "foot-ref",
            NodeKind::Subst => "subst",
        };
        write!(f, "{}", name)
    }
}

/// A single tree node.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub args: Vec<String>,
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            args: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_args(kind: NodeKind, args: Vec<String>) -> Self {
        Self {
            kind,
            args,
            children: Vec::new(),
        }
    }

    /// Plain text inline leaf.
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_args(NodeKind::Text, vec![content.into()])
    }

    /// Recovered anomaly carrying a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_args(NodeKind::Error, vec![message.into()])
    }

    /// First argument, or the empty string.
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Arena-backed document tree.
///
/// The root is allocated on construction and never removed. Nodes are only
/// appended; ownership is strictly hierarchical and no node is reachable
/// from two parents.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Top)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Store a node without attaching it to a parent.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Store a node and attach it as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.alloc(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].children.last().copied()
    }

    /// Iterate over all node handles in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Number of nodes in the arena, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
