//! Plain-text rendering of a document, used for previews.

use crate::model::node::{Document, Node};

/// Flattens a document into readable text without block markers.
///
/// Blocks are joined by `\n`; line breaks inside a paragraph become spaces.
pub fn plain_text(document: &Document) -> String {
    document
        .iter()
        .map(block_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn block_text(node: &Node) -> String {
    match node {
        Node::CodeBlock { content, .. } => content.clone(),
        Node::LineBreak => String::new(),
        other if other.is_block() => inline_text(other.children()),
        inline => inline_text(std::slice::from_ref(inline)),
    }
}

fn inline_text(nodes: &[Node]) -> String {
    let mut output = String::new();
    for node in nodes {
        match node {
            Node::Text { content } | Node::Code { content } => output.push_str(content),
            Node::Tag { name } => {
                output.push('#');
                output.push_str(name);
            }
            Node::AutoLink { url } => output.push_str(url),
            Node::LineBreak => output.push(' '),
            block => output.push_str(&block_text(block)),
        }
    }
    output
}
