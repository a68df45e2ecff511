//! Node serializer.
//!
//! # Responsibility
//! - Flatten a document back into storable note text.
//!
//! # Invariants
//! - Blocks are emitted in document order, one line each (code blocks span
//!   several), joined by `\n`.
//! - Two adjacent paragraphs are separated by an empty line so the output
//!   re-parses into the same blocks.
//! - Tags render as `#name` and auto-links as their URL.

use crate::content::patterns::FENCE;
use crate::model::node::{Document, Node, NodeValidationError};

const INDENT_UNIT: &str = "  ";

/// Serializes a document into note text.
pub fn serialize_document(document: &Document) -> String {
    let mut output = String::new();
    let mut previous: Option<&Node> = None;
    for node in document {
        if let Some(previous) = previous {
            output.push('\n');
            if matches!(
                (previous, node),
                (Node::Paragraph { .. }, Node::Paragraph { .. })
            ) {
                output.push('\n');
            }
        }
        output.push_str(&serialize_node(node));
        previous = Some(node);
    }
    output
}

/// Validates a document before serializing it.
///
/// Used for trees edited outside the parser.
pub fn try_serialize_document(document: &Document) -> Result<String, NodeValidationError> {
    document.validate()?;
    Ok(serialize_document(document))
}

/// Serializes one node. Inline nodes render as their inline source.
pub fn serialize_node(node: &Node) -> String {
    match node {
        Node::Paragraph { children } => render_inline(children),
        Node::Heading { level, children } => {
            format!(
                "{} {}",
                "#".repeat(usize::from(*level)),
                render_inline(children)
            )
        }
        Node::CodeBlock { language, content } => {
            let mut block = format!("{FENCE}{language}\n");
            if !content.is_empty() {
                block.push_str(content);
                block.push('\n');
            }
            block.push_str(FENCE);
            block
        }
        Node::UnorderedListItem { indent, children } => {
            format!("{}- {}", INDENT_UNIT.repeat(*indent), render_inline(children))
        }
        Node::OrderedListItem {
            indent,
            marker,
            children,
        } => format!(
            "{}{marker}. {}",
            INDENT_UNIT.repeat(*indent),
            render_inline(children)
        ),
        Node::TaskListItem {
            indent,
            complete,
            children,
        } => format!(
            "{}- [{}] {}",
            INDENT_UNIT.repeat(*indent),
            if *complete { "x" } else { " " },
            render_inline(children)
        ),
        // A separator between blocks is an empty line of its own.
        Node::LineBreak => String::new(),
        Node::Text { .. }
        | Node::Tag { .. }
        | Node::AutoLink { .. }
        | Node::Code { .. } => render_inline(std::slice::from_ref(node)),
    }
}

/// Renders an inline run back into its source text.
///
/// `LINE_BREAK` renders as `\n`, restoring the line boundary between
/// buffered paragraph lines.
pub fn render_inline(nodes: &[Node]) -> String {
    let mut output = String::new();
    for node in nodes {
        match node {
            Node::Text { content } => output.push_str(content),
            Node::Tag { name } => {
                output.push('#');
                output.push_str(name);
            }
            Node::AutoLink { url } => output.push_str(url),
            Node::Code { content } => {
                output.push('`');
                output.push_str(content);
                output.push('`');
            }
            Node::LineBreak => output.push('\n'),
            block => output.push_str(&serialize_node(block)),
        }
    }
    output
}
