//! Inline tokenizer.
//!
//! # Responsibility
//! - Split one line into an ordered run of `TEXT`, `TAG` and `AUTO_LINK`
//!   nodes.
//!
//! # Invariants
//! - Spans are contiguous and non-overlapping; concatenating their source
//!   extents reproduces the line exactly.
//! - A non-empty line always yields at least one node.
//! - When two matches overlap, the one starting first wins and the later one
//!   stays inside its text.

use crate::content::patterns::{TAG_RE, URL_RE};
use crate::model::node::Node;

/// One inline node together with its `[start, end)` byte extent in the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub start: usize,
    pub end: usize,
    pub node: Node,
}

impl InlineSpan {
    /// Returns the slice of `line` this span was produced from.
    pub fn source<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}

/// Tokenizes one line into inline nodes.
pub fn tokenize(line: &str) -> Vec<Node> {
    tokenize_spans(line)
        .into_iter()
        .map(|span| span.node)
        .collect()
}

/// Tokenizes one line and keeps the source extent of every node.
pub fn tokenize_spans(line: &str) -> Vec<InlineSpan> {
    if line.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for caps in TAG_RE.captures_iter(line) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        matches.push(InlineSpan {
            start: whole.start(),
            end: whole.end(),
            node: Node::Tag {
                name: name.as_str().to_string(),
            },
        });
    }
    for found in URL_RE.find_iter(line) {
        matches.push(InlineSpan {
            start: found.start(),
            end: found.end(),
            node: Node::AutoLink {
                url: found.as_str().to_string(),
            },
        });
    }
    // Stable: for equal starts, discovery order (tags, then links) is kept.
    matches.sort_by_key(|span| span.start);

    let mut spans = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0;
    for candidate in matches {
        if candidate.start < cursor {
            continue;
        }
        if candidate.start > cursor {
            spans.push(text_span(line, cursor, candidate.start));
        }
        cursor = candidate.end;
        spans.push(candidate);
    }
    if cursor < line.len() {
        spans.push(text_span(line, cursor, line.len()));
    }

    spans
}

fn text_span(line: &str, start: usize, end: usize) -> InlineSpan {
    InlineSpan {
        start,
        end,
        node: Node::Text {
            content: line[start..end].to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{tokenize, tokenize_spans};
    use crate::model::node::Node;

    fn text(content: &str) -> Node {
        Node::Text {
            content: content.to_string(),
        }
    }

    fn tag(name: &str) -> Node {
        Node::Tag {
            name: name.to_string(),
        }
    }

    fn link(url: &str) -> Node {
        Node::AutoLink {
            url: url.to_string(),
        }
    }

    fn assert_coverage(line: &str) {
        let spans = tokenize_spans(line);
        let mut cursor = 0;
        for span in &spans {
            assert_eq!(span.start, cursor, "gap or overlap in `{line}`");
            assert!(span.end > span.start, "empty span in `{line}`");
            cursor = span.end;
        }
        assert_eq!(cursor, line.len(), "line `{line}` not fully covered");
        let rebuilt = spans
            .iter()
            .map(|span| span.source(line))
            .collect::<String>();
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn plain_line_is_one_text_node() {
        assert_eq!(tokenize("just words"), vec![text("just words")]);
    }

    #[test]
    fn empty_line_yields_no_nodes() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn whitespace_is_preserved_verbatim() {
        assert_eq!(tokenize("   "), vec![text("   ")]);
        assert_eq!(
            tokenize("  #a  b "),
            vec![text("  "), tag("a"), text("  b ")]
        );
    }

    #[test]
    fn tags_and_links_are_interleaved_with_text() {
        assert_eq!(
            tokenize("check out https://example.com #work"),
            vec![
                text("check out "),
                link("https://example.com"),
                text(" "),
                tag("work"),
            ]
        );
    }

    #[test]
    fn adjacent_matches_emit_no_empty_text() {
        assert_eq!(tokenize("#a#b"), vec![tag("a"), tag("b")]);
    }

    #[test]
    fn cjk_tags_are_recognized() {
        assert_eq!(tokenize("#読書 メモ"), vec![tag("読書"), text(" メモ")]);
    }

    #[test]
    fn hash_inside_link_stays_part_of_link() {
        assert_eq!(
            tokenize("see https://example.com/#section ok"),
            vec![
                text("see "),
                link("https://example.com/#section"),
                text(" ok"),
            ]
        );
    }

    #[test]
    fn link_starting_inside_tag_is_dropped() {
        assert_eq!(
            tokenize("#xhttp://a.b"),
            vec![tag("xhttp"), text("://a.b")]
        );
    }

    #[test]
    fn lone_hash_is_text() {
        assert_eq!(tokenize("# not a tag"), vec![text("# not a tag")]);
    }

    #[test]
    fn spans_cover_every_line() {
        for line in [
            "plain",
            "#tag",
            "a #b c",
            "https://x.y",
            "x https://x.y/#frag #after",
            "#aa https://b.c#d #e",
            "#xhttp://a.b #c",
            "多字节 #标签 text",
            "  leading and trailing  ",
            "#",
            "###",
            "http://",
        ] {
            assert_coverage(line);
        }
    }

    #[test]
    fn tokenizing_is_deterministic() {
        let line = "mixed #one https://two.example #three";
        assert_eq!(tokenize(line), tokenize(line));
    }
}
