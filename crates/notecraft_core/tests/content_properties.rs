use notecraft_core::content::{tokenize_spans, InlineSpan};
use notecraft_core::{
    classify, extract_tags, parse_document, serialize_document, Document, Node,
};
use std::collections::BTreeSet;

const CORPUS: &[&str] = &[
    "",
    "plain note",
    "check out https://example.com #work",
    "# Heading #h1\n## Second #h2\n####### not #heading",
    "- [x] done #ok\n- [ ] todo #later\n  - nested #deep\n3. third #n",
    "```js\n#not_a_tag\nconsole.log(1)\n```\nafter #yes",
    "```\nunterminated #hidden\n\n#still_hidden",
    "  ```  \n#hidden\n   ```\n#shown",
    "https://example.com/#fragment #real",
    "#aahttp://b#c #d",
    "#xhttp://a.b #c",
    "中文 #标签 and #タグ and #태그",
    "#a#b#c",
    "tag-like: #, ##, #-dash, #_under",
    "line one #x\nline two #y\n\nparagraph #z",
    "- [ ]\n- [x]x #weird\n1.#no_space",
    "email me@host.com#hash",
    "\r\n#crlf\r\n",
];

fn collect_tag_names(nodes: &[Node], names: &mut BTreeSet<String>) {
    for node in nodes {
        match node {
            Node::Tag { name } => {
                names.insert(name.clone());
            }
            other => collect_tag_names(other.children(), names),
        }
    }
}

fn tree_tags(document: &Document) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    collect_tag_names(document.nodes(), &mut names);
    names
}

#[test]
fn extracted_tags_match_parsed_tag_nodes() {
    for text in CORPUS {
        let document = parse_document(text);
        assert_eq!(
            extract_tags(text),
            tree_tags(&document),
            "tag disagreement for {text:?}"
        );
    }
}

#[test]
fn inline_spans_cover_every_corpus_line() {
    for text in CORPUS {
        for line in text.lines() {
            let spans: Vec<InlineSpan> = tokenize_spans(line);
            let mut cursor = 0;
            for span in &spans {
                assert_eq!(span.start, cursor, "gap or overlap in {line:?}");
                cursor = span.end;
            }
            assert_eq!(cursor, line.len(), "uncovered tail in {line:?}");
        }
    }
}

#[test]
fn parsing_is_deterministic() {
    for text in CORPUS {
        assert_eq!(parse_document(text), parse_document(text));
    }
}

#[test]
fn plain_paragraphs_round_trip_line_for_line() {
    for text in [
        "single line",
        "first line\nsecond line\nthird line",
        "para one\nstill one\n\npara two",
        "  indented text keeps its spaces",
        "a\n\nb\n\nc",
    ] {
        assert_eq!(serialize_document(&parse_document(text)), text);
    }
}

#[test]
fn serialized_trees_reparse_to_the_same_tree() {
    for text in CORPUS {
        let document = parse_document(text);
        let reparsed = parse_document(&serialize_document(&document));
        assert_eq!(reparsed, document, "tree changed for {text:?}");
    }
}

#[test]
fn code_block_fidelity() {
    let source = "```js\nconsole.log(1)\n```";
    let document = parse_document(source);
    assert_eq!(
        document.nodes(),
        &[Node::CodeBlock {
            language: "js".to_string(),
            content: "console.log(1)".to_string(),
        }]
    );
    assert_eq!(serialize_document(&document), source);
}

#[test]
fn task_list_scenario() {
    let document = parse_document("- [x] done\n- [ ] todo");
    let items = document
        .iter()
        .map(|node| match node {
            Node::TaskListItem {
                indent, complete, ..
            } => (*indent, *complete),
            other => panic!("unexpected node {other:?}"),
        })
        .collect::<Vec<_>>();
    assert_eq!(items, vec![(0, true), (0, false)]);
}

#[test]
fn classifier_scenario() {
    let text = "check out https://example.com #work";
    let properties = classify(text);
    assert!(properties.has_link);
    assert!(!properties.has_task_list);
    assert!(!properties.has_code);
    assert_eq!(
        extract_tags(text),
        BTreeSet::from(["work".to_string()])
    );
}

#[test]
fn heading_scenario() {
    let document = parse_document("## Title");
    assert_eq!(
        document.nodes(),
        &[Node::Heading {
            level: 2,
            children: vec![Node::Text {
                content: "Title".to_string(),
            }],
        }]
    );
}

#[test]
fn tags_and_links_survive_round_trip() {
    let text = "- [ ] read https://example.com/a?b=1 #reading\n# Notes #inbox";
    assert_eq!(serialize_document(&parse_document(text)), text);
}
