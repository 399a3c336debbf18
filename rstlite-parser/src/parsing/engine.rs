//! Block tokenizer: lines to a tree of block nodes.
//!
//! State is two parallel stacks (open blocks and indent thresholds, both
//! rooted and never emptied), a cursor over the lines, and the
//! `directive_init` flag that turns the field rule into the directive-option
//! rule for the lines immediately following a directive.
//!
//! The cursor only ever moves backwards through the `redo` slot: a matched
//! list marker is stripped, the remaining text re-indented by the marker
//! width, and the revised line reprocessed at the same index. The revised
//! text is strictly shorter, so the redo cannot loop.

use crate::ast::{Document, Node, NodeId, NodeKind};
use crate::lexing::classify::{self, LineBlockMatch};
use crate::lexing::Line;

/// Tokenize normalized lines into a block tree.
pub fn tokenize(lines: &[Line]) -> Document {
    let mut doc = Document::new();
    let mut stack: Vec<NodeId> = vec![doc.root()];
    let mut thresholds: Vec<usize> = vec![0];
    let mut directive_init = false;

    let mut i = 0usize;
    let mut redo: Option<Line> = None;

    while i < lines.len() {
        let current = match redo.take() {
            Some(line) => line,
            None => lines[i].clone(),
        };
        let indent = current.indent;
        let text = current.text.as_str();

        let next_text = lines.get(i + 1).map(|l| l.text.as_str());
        let prev_blank = i == 0 || lines[i - 1].text.is_empty();

        // Blank line: no indent bookkeeping.
        if text.is_empty() {
            directive_init = false;
            i += 1;
            continue;
        }

        // Indentation changes first.
        if indent > *thresholds.last().unwrap() {
            let open = *stack.last().unwrap();
            let adopted = doc.last_child(open).filter(|&id| {
                matches!(
                    doc.node(id).kind,
                    NodeKind::Directive | NodeKind::Foot | NodeKind::ListItem
                )
            });
            match adopted {
                Some(id) => {
                    // Indented content belongs to the directive, footnote,
                    // or list item that introduced it.
                    directive_init = doc.node(id).kind == NodeKind::Directive;
                    stack.push(id);
                }
                None => {
                    let id = doc.append(open, Node::new(NodeKind::Block));
                    stack.push(id);
                }
            }
            thresholds.push(indent);
        } else if indent < *thresholds.last().unwrap() {
            // Dedents landing between two stacked levels are accepted
            // without validation.
            while *thresholds.last().unwrap() > indent {
                stack.pop();
                thresholds.pop();
            }
        }

        let open = *stack.last().unwrap();

        // Directive header. Any option context from an earlier directive
        // ends here; the flag is set again when indented content adopts
        // this directive.
        if let Some((name, arg)) = classify::match_directive(text) {
            directive_init = false;
            doc.append(open, Node::with_args(NodeKind::Directive, vec![name, arg]));
            i += 1;
            continue;
        }

        // Directive option or field.
        if let Some((name, value)) = classify::match_field(text) {
            let kind = if directive_init {
                NodeKind::DirectiveOption
            } else {
                NodeKind::Field
            };
            let mut args = vec![name];
            if let Some(value) = value {
                args.push(value);
            }
            args.extend(slurp_indented(lines, &mut i, indent));
            doc.append(open, Node::with_args(kind, args));
            i += 1;
            continue;
        }

        directive_init = false;

        // Footnote or citation definition.
        if let Some((label, rest)) = classify::match_footnote(text) {
            let foot = doc.append(open, Node::with_args(NodeKind::Foot, vec![label]));
            if let Some(rest) = rest {
                doc.append(foot, Node::with_args(NodeKind::Inline, vec![rest]));
            }
            i += 1;
            continue;
        }

        // Link target.
        if let Some((name, value)) = classify::match_target(text) {
            let mut args = vec![name, value];
            args.extend(slurp_indented(lines, &mut i, indent));
            doc.append(open, Node::with_args(NodeKind::Target, args));
            i += 1;
            continue;
        }
        if let Some(value) = classify::match_anonymous_target(text) {
            let mut args = vec![String::new(), value];
            args.extend(slurp_indented(lines, &mut i, indent));
            doc.append(open, Node::with_args(NodeKind::Target, args));
            i += 1;
            continue;
        }

        // Substitution definition.
        if let Some((name, value)) = classify::match_substitution_def(text) {
            let mut args = vec![name];
            if let Some(value) = value {
                args.push(value);
            }
            args.extend(slurp_indented(lines, &mut i, indent));
            doc.append(open, Node::with_args(NodeKind::SubstDef, args));
            i += 1;
            continue;
        }

        // Comment: consumed together with its continuation, no node.
        if classify::is_comment(text) {
            slurp_indented(lines, &mut i, indent);
            i += 1;
            continue;
        }

        // Line block.
        if let Some(entry) = classify::match_line_block(text) {
            match entry {
                LineBlockMatch::Entry(value) => {
                    let previous = doc
                        .last_child(open)
                        .filter(|&id| doc.node(id).kind == NodeKind::LineBlock);
                    match previous {
                        Some(id) => doc.node_mut(id).args.push(value),
                        None => {
                            doc.append(open, Node::with_args(NodeKind::LineBlock, vec![value]));
                        }
                    }
                }
                LineBlockMatch::Invalid => {
                    doc.append(open, Node::error("Invalid line block"));
                }
            }
            i += 1;
            continue;
        }

        // Literal block: trailing :: plus a following blank line.
        if next_text == Some("") {
            if let Some(prefix) = classify::literal_trigger(text) {
                if !prefix.is_empty() {
                    // The marker collapses to a single literal colon. A
                    // running paragraph keeps the text; otherwise it opens
                    // a fresh one.
                    let folded = format!("{}:", prefix);
                    let continuing = doc
                        .last_child(open)
                        .filter(|&id| doc.node(id).kind == NodeKind::Inline && !prev_blank);
                    match continuing {
                        Some(id) => {
                            let pending = &mut doc.node_mut(id).args[0];
                            pending.push(' ');
                            pending.push_str(&folded);
                        }
                        None => {
                            doc.append(open, Node::with_args(NodeKind::Inline, vec![folded]));
                        }
                    }
                }
                i += 1; // step onto the blank line
                let mut content = slurp_indented(lines, &mut i, indent);
                while content.last().is_some_and(|l| l.is_empty()) {
                    content.pop();
                }
                doc.append(open, Node::with_args(NodeKind::Pre, vec![content.join("\n")]));
                i += 1;
                continue;
            }
        }

        // Section heading (underline lookahead).
        if let Some((ch, len)) = next_text.and_then(classify::underline) {
            let title_len = text.chars().count();
            if len >= 3 && title_len <= len {
                doc.append(
                    open,
                    Node::with_args(NodeKind::Section, vec![text.to_string(), ch.to_string()]),
                );
                i += 2;
                continue;
            }
            if title_len > len {
                doc.append(open, Node::error("Title underline wrong"));
                i += 2;
                continue;
            }
            // A two-character run under an equally short title is not an
            // underline; fall through.
        }

        // List item: strip the marker, re-indent the remainder by the marker
        // width and reprocess it as content of the fresh item.
        if let Some(marker) = classify::match_list_item(text) {
            let prev_inline = doc
                .last_child(open)
                .is_some_and(|id| doc.node(id).kind == NodeKind::Inline);
            if prev_blank || !prev_inline {
                doc.append(open, Node::with_args(NodeKind::ListItem, vec![marker.marker]));
                redo = Some(Line {
                    indent: indent + marker.width,
                    text: marker.rest,
                });
                continue;
            }
        }

        // Anything else is paragraph text. A line directly below a running
        // paragraph continues it, joined by a single space.
        let continuing = doc
            .last_child(open)
            .filter(|&id| doc.node(id).kind == NodeKind::Inline && !prev_blank);
        match continuing {
            Some(id) => {
                let node = doc.node_mut(id);
                let pending = &mut node.args[0];
                pending.push(' ');
                pending.push_str(text);
            }
            None => {
                doc.append(open, Node::with_args(NodeKind::Inline, vec![text.to_string()]));
            }
        }
        i += 1;
    }

    log::debug!("tokenized {} lines into {} nodes", lines.len(), doc.len());
    doc
}

/// Consume the indented continuation following line `*i`: every subsequent
/// line that is blank or indented more than `reference` belongs to it. The
/// captured lines are re-based against the first non-blank line's indent, so
/// a deeper block keeps only its relative indentation. Leaves `*i` on the
/// last consumed line.
fn slurp_indented(lines: &[Line], i: &mut usize, reference: usize) -> Vec<String> {
    let mut items = Vec::new();
    let mut base: Option<usize> = None;
    let mut j = *i + 1;
    while j < lines.len() && (lines[j].text.is_empty() || lines[j].indent > reference) {
        if lines[j].text.is_empty() {
            items.push(String::new());
        } else {
            let b = *base.get_or_insert(lines[j].indent);
            let pad = lines[j].indent.saturating_sub(b);
            items.push(format!("{}{}", " ".repeat(pad), lines[j].text));
        }
        j += 1;
    }
    *i = j - 1;
    items
}
