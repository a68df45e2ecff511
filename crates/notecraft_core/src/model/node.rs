//! Node and document types.
//!
//! # Responsibility
//! - Provide one closed sum type for every block and inline construct.
//! - Keep the JSON wire shape stable for renderers and the FFI layer.
//!
//! # Invariants
//! - `indent` is `floor(leading_whitespace / 2)`.
//! - Tag names never carry the leading `#`.
//! - Auto-link URLs always start with `http://` or `https://`.
//! - Code block content never contains a fence line.

use crate::content::patterns::{is_fence_line, is_tag_name, URL_PREFIXES};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One element of a parsed note body.
///
/// Block and inline nodes share this enum so consumers must handle every
/// kind exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Node {
    /// Consecutive text lines grouped until a blank line or another block.
    Paragraph { children: Vec<Node> },
    /// `#`..`######` heading line.
    Heading { level: u8, children: Vec<Node> },
    /// Fenced code block. `language` may be empty.
    CodeBlock { language: String, content: String },
    UnorderedListItem { indent: usize, children: Vec<Node> },
    /// `marker` holds the digits in front of the `.`.
    OrderedListItem {
        indent: usize,
        marker: String,
        children: Vec<Node>,
    },
    TaskListItem {
        indent: usize,
        complete: bool,
        children: Vec<Node>,
    },
    /// Separator between buffered lines of one paragraph.
    LineBreak,
    Text { content: String },
    /// Hashtag name without the leading `#`.
    Tag { name: String },
    AutoLink { url: String },
    /// Inline code span without the surrounding backticks.
    Code { content: String },
}

/// Fieldless discriminant of [`Node`], used for logging and validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Paragraph,
    Heading,
    CodeBlock,
    UnorderedListItem,
    OrderedListItem,
    TaskListItem,
    LineBreak,
    Text,
    Tag,
    AutoLink,
    Code,
}

impl NodeKind {
    /// Returns the wire name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paragraph => "PARAGRAPH",
            Self::Heading => "HEADING",
            Self::CodeBlock => "CODE_BLOCK",
            Self::UnorderedListItem => "UNORDERED_LIST_ITEM",
            Self::OrderedListItem => "ORDERED_LIST_ITEM",
            Self::TaskListItem => "TASK_LIST_ITEM",
            Self::LineBreak => "LINE_BREAK",
            Self::Text => "TEXT",
            Self::Tag => "TAG",
            Self::AutoLink => "AUTO_LINK",
            Self::Code => "CODE",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation error for trees built outside the block scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeValidationError {
    /// Heading level outside `1..=6`.
    InvalidHeadingLevel(u8),
    /// Tag name empty or outside the hashtag alphabet.
    InvalidTagName(String),
    /// Link does not start with an http(s) scheme or contains whitespace.
    InvalidAutoLink(String),
    /// Ordered list marker is empty or not made of ASCII digits.
    InvalidOrdinal(String),
    /// Code block content contains a line that would close the fence.
    FenceInCodeBlock,
    /// Block node used as inline content, or inline node at top level.
    MisplacedNode { kind: NodeKind, position: usize },
}

impl Display for NodeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHeadingLevel(level) => {
                write!(f, "heading level must be within 1..=6, got {level}")
            }
            Self::InvalidTagName(name) => write!(f, "invalid tag name: `{name}`"),
            Self::InvalidAutoLink(url) => write!(f, "invalid auto link: `{url}`"),
            Self::InvalidOrdinal(marker) => write!(f, "invalid ordered list marker: `{marker}`"),
            Self::FenceInCodeBlock => f.write_str("code block content contains a fence line"),
            Self::MisplacedNode { kind, position } => {
                write!(f, "{kind} node is not allowed at position {position}")
            }
        }
    }
}

impl Error for NodeValidationError {}

impl Node {
    /// Returns the fieldless discriminant.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Paragraph { .. } => NodeKind::Paragraph,
            Self::Heading { .. } => NodeKind::Heading,
            Self::CodeBlock { .. } => NodeKind::CodeBlock,
            Self::UnorderedListItem { .. } => NodeKind::UnorderedListItem,
            Self::OrderedListItem { .. } => NodeKind::OrderedListItem,
            Self::TaskListItem { .. } => NodeKind::TaskListItem,
            Self::LineBreak => NodeKind::LineBreak,
            Self::Text { .. } => NodeKind::Text,
            Self::Tag { .. } => NodeKind::Tag,
            Self::AutoLink { .. } => NodeKind::AutoLink,
            Self::Code { .. } => NodeKind::Code,
        }
    }

    /// Returns whether this node occupies one or more full lines.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Self::Paragraph { .. }
                | Self::Heading { .. }
                | Self::CodeBlock { .. }
                | Self::UnorderedListItem { .. }
                | Self::OrderedListItem { .. }
                | Self::TaskListItem { .. }
        )
    }

    /// Returns whether this node is a span inside a block.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Self::Text { .. } | Self::Tag { .. } | Self::AutoLink { .. } | Self::Code { .. }
        )
    }

    /// Returns the inline children of a block node, empty for everything else.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Paragraph { children }
            | Self::Heading { children, .. }
            | Self::UnorderedListItem { children, .. }
            | Self::OrderedListItem { children, .. }
            | Self::TaskListItem { children, .. } => children,
            _ => &[],
        }
    }

    /// Validates payload invariants of this node and its children.
    pub fn validate(&self) -> Result<(), NodeValidationError> {
        match self {
            Self::Paragraph { children } => validate_inline_run(children, true),
            Self::Heading { level, children } => {
                if !(1..=6).contains(level) {
                    return Err(NodeValidationError::InvalidHeadingLevel(*level));
                }
                validate_inline_run(children, false)
            }
            Self::CodeBlock { content, .. } => {
                if content.lines().any(is_fence_line) {
                    return Err(NodeValidationError::FenceInCodeBlock);
                }
                Ok(())
            }
            Self::OrderedListItem {
                marker, children, ..
            } => {
                if marker.is_empty() || !marker.bytes().all(|byte| byte.is_ascii_digit()) {
                    return Err(NodeValidationError::InvalidOrdinal(marker.clone()));
                }
                validate_inline_run(children, false)
            }
            Self::UnorderedListItem { children, .. } | Self::TaskListItem { children, .. } => {
                validate_inline_run(children, false)
            }
            Self::Tag { name } => {
                if !is_tag_name(name) {
                    return Err(NodeValidationError::InvalidTagName(name.clone()));
                }
                Ok(())
            }
            Self::AutoLink { url } => {
                let has_scheme = URL_PREFIXES.iter().any(|prefix| {
                    url.strip_prefix(*prefix)
                        .is_some_and(|rest| !rest.is_empty())
                });
                if !has_scheme || url.chars().any(char::is_whitespace) {
                    return Err(NodeValidationError::InvalidAutoLink(url.clone()));
                }
                Ok(())
            }
            Self::LineBreak | Self::Text { .. } | Self::Code { .. } => Ok(()),
        }
    }
}

fn validate_inline_run(children: &[Node], allow_line_break: bool) -> Result<(), NodeValidationError> {
    for (position, child) in children.iter().enumerate() {
        let allowed = child.is_inline() || (allow_line_break && *child == Node::LineBreak);
        if !allowed {
            return Err(NodeValidationError::MisplacedNode {
                kind: child.kind(),
                position,
            });
        }
        child.validate()?;
    }
    Ok(())
}

/// Ordered sequence of top-level block nodes.
///
/// Serialized as a bare JSON array of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Vec<Node>);

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.0.iter()
    }

    /// Validates every top-level node.
    ///
    /// Top level accepts block nodes and bare `LINE_BREAK` separators only.
    pub fn validate(&self) -> Result<(), NodeValidationError> {
        for (position, node) in self.0.iter().enumerate() {
            if node.is_inline() {
                return Err(NodeValidationError::MisplacedNode {
                    kind: node.kind(),
                    position,
                });
            }
            node.validate()?;
        }
        Ok(())
    }
}

impl From<Vec<Node>> for Document {
    fn from(value: Vec<Node>) -> Self {
        Self(value)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
