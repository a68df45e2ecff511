//! Block scanner.
//!
//! # Responsibility
//! - Classify every line of a note body and assemble block-level nodes.
//! - Delegate the content of text-bearing lines to the inline tokenizer.
//!
//! # Invariants
//! - Classification precedence is fence > task item > unordered item >
//!   ordered item > heading > blank > paragraph, in rule-table order.
//! - Any input parses; malformed constructs fall through to paragraph text.
//! - An unterminated fence absorbs the rest of the input.

use crate::content::inline::tokenize;
use crate::content::patterns::{is_fence_line, FENCE};
use crate::model::node::{Document, Node};
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TASK_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)- \[([ xX])\] (.*)$").expect("valid task item regex"));
static UNORDERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)- (.*)$").expect("valid unordered item regex"));
static ORDERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)([0-9]+)\. (.*)$").expect("valid ordered item regex"));
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6}) (.*)$").expect("valid heading regex"));

/// Block classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    CodeFence,
    TaskListItem,
    UnorderedListItem,
    OrderedListItem,
    Heading,
    Blank,
    Paragraph,
}

/// Result of the first rule that accepted a line.
enum LineMatch<'a> {
    Fence { language: &'a str },
    Block(Node),
    Blank,
}

struct LineRule {
    kind: LineKind,
    apply: fn(&str) -> Option<LineMatch<'_>>,
}

/// Ordered rule table; the first rule that accepts a line wins.
const LINE_RULES: &[LineRule] = &[
    LineRule {
        kind: LineKind::CodeFence,
        apply: match_fence,
    },
    LineRule {
        kind: LineKind::TaskListItem,
        apply: match_task_item,
    },
    LineRule {
        kind: LineKind::UnorderedListItem,
        apply: match_unordered_item,
    },
    LineRule {
        kind: LineKind::OrderedListItem,
        apply: match_ordered_item,
    },
    LineRule {
        kind: LineKind::Heading,
        apply: match_heading,
    },
    LineRule {
        kind: LineKind::Blank,
        apply: match_blank,
    },
];

/// Returns the block classification of one line.
pub fn line_kind(line: &str) -> LineKind {
    LINE_RULES
        .iter()
        .find(|rule| (rule.apply)(line).is_some())
        .map_or(LineKind::Paragraph, |rule| rule.kind)
}

fn classify(line: &str) -> Option<LineMatch<'_>> {
    LINE_RULES.iter().find_map(|rule| (rule.apply)(line))
}

/// Parses a full note body into a document.
pub fn parse_document(text: &str) -> Document {
    let lines = text.lines().collect::<Vec<_>>();
    BlockScanner::new(&lines).run().into()
}

struct BlockScanner<'a> {
    lines: &'a [&'a str],
    cursor: usize,
    nodes: Vec<Node>,
    paragraph: Vec<&'a str>,
}

impl<'a> BlockScanner<'a> {
    fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            cursor: 0,
            nodes: Vec::new(),
            paragraph: Vec::new(),
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(line)
    }

    fn run(mut self) -> Vec<Node> {
        while let Some(line) = self.next_line() {
            match classify(line) {
                Some(LineMatch::Fence { language }) => {
                    self.flush_paragraph();
                    self.consume_code_block(language);
                }
                Some(LineMatch::Block(node)) => {
                    self.flush_paragraph();
                    self.nodes.push(node);
                }
                Some(LineMatch::Blank) => self.flush_paragraph(),
                None => self.paragraph.push(line),
            }
        }
        self.flush_paragraph();
        self.nodes
    }

    fn consume_code_block(&mut self, language: &str) {
        let opened_at = self.cursor;
        let mut content = Vec::new();
        let mut closed = false;
        while let Some(line) = self.next_line() {
            if is_fence_line(line) {
                closed = true;
                break;
            }
            content.push(line);
        }
        if !closed {
            debug!(
                "event=code_fence_unterminated module=content status=ok line={} absorbed_lines={}",
                opened_at,
                content.len()
            );
        }
        self.nodes.push(Node::CodeBlock {
            language: language.to_string(),
            content: content.join("\n"),
        });
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let mut children = Vec::new();
        for (index, line) in self.paragraph.drain(..).enumerate() {
            if index > 0 {
                children.push(Node::LineBreak);
            }
            children.extend(tokenize(line));
        }
        if !children.is_empty() {
            self.nodes.push(Node::Paragraph { children });
        }
    }
}

fn match_fence(line: &str) -> Option<LineMatch<'_>> {
    let rest = line.trim().strip_prefix(FENCE)?;
    Some(LineMatch::Fence {
        language: rest.trim(),
    })
}

fn match_task_item(line: &str) -> Option<LineMatch<'_>> {
    let caps = TASK_ITEM_RE.captures(line)?;
    let complete = matches!(group(&caps, 2), "x" | "X");
    Some(LineMatch::Block(Node::TaskListItem {
        indent: indent_of(group(&caps, 1)),
        complete,
        children: tokenize(group(&caps, 3)),
    }))
}

fn match_unordered_item(line: &str) -> Option<LineMatch<'_>> {
    let caps = UNORDERED_ITEM_RE.captures(line)?;
    Some(LineMatch::Block(Node::UnorderedListItem {
        indent: indent_of(group(&caps, 1)),
        children: tokenize(group(&caps, 2)),
    }))
}

fn match_ordered_item(line: &str) -> Option<LineMatch<'_>> {
    let caps = ORDERED_ITEM_RE.captures(line)?;
    Some(LineMatch::Block(Node::OrderedListItem {
        indent: indent_of(group(&caps, 1)),
        marker: group(&caps, 2).to_string(),
        children: tokenize(group(&caps, 3)),
    }))
}

fn match_heading(line: &str) -> Option<LineMatch<'_>> {
    let caps = HEADING_RE.captures(line)?;
    // The pattern bounds the marker to six characters.
    let level = group(&caps, 1).len() as u8;
    Some(LineMatch::Block(Node::Heading {
        level,
        children: tokenize(group(&caps, 2)),
    }))
}

fn match_blank(line: &str) -> Option<LineMatch<'_>> {
    line.trim().is_empty().then_some(LineMatch::Blank)
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |found| found.as_str())
}

fn indent_of(leading: &str) -> usize {
    leading.chars().count() / 2
}
