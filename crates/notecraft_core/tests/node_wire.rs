use notecraft_core::{parse_document, Document, Node, NodeKind};
use serde_json::json;

#[test]
fn document_serializes_as_tagged_node_array() {
    let document = parse_document("# Hi #there\n- [x] ok https://e.com\n```sh\nls\n```\na\nb");
    let value = serde_json::to_value(&document).unwrap();
    assert_eq!(
        value,
        json!([
            {
                "type": "HEADING",
                "level": 1,
                "children": [
                    {"type": "TEXT", "content": "Hi "},
                    {"type": "TAG", "name": "there"}
                ]
            },
            {
                "type": "TASK_LIST_ITEM",
                "indent": 0,
                "complete": true,
                "children": [
                    {"type": "TEXT", "content": "ok "},
                    {"type": "AUTO_LINK", "url": "https://e.com"}
                ]
            },
            {"type": "CODE_BLOCK", "language": "sh", "content": "ls"},
            {
                "type": "PARAGRAPH",
                "children": [
                    {"type": "TEXT", "content": "a"},
                    {"type": "LINE_BREAK"},
                    {"type": "TEXT", "content": "b"}
                ]
            }
        ])
    );
}

#[test]
fn edited_json_deserializes_into_nodes() {
    let value = json!([
        {
            "type": "ORDERED_LIST_ITEM",
            "indent": 1,
            "marker": "2",
            "children": [{"type": "CODE", "content": "x"}]
        }
    ]);
    let document: Document = serde_json::from_value(value).unwrap();
    assert_eq!(
        document.nodes(),
        &[Node::OrderedListItem {
            indent: 1,
            marker: "2".to_string(),
            children: vec![Node::Code {
                content: "x".to_string(),
            }],
        }]
    );
    assert!(document.validate().is_ok());
}

#[test]
fn unknown_node_type_is_rejected() {
    let value = json!([{"type": "TABLE", "rows": []}]);
    assert!(serde_json::from_value::<Document>(value).is_err());
}

#[test]
fn node_kind_uses_wire_names() {
    assert_eq!(
        serde_json::to_value(NodeKind::AutoLink).unwrap(),
        json!("AUTO_LINK")
    );
    assert_eq!(NodeKind::UnorderedListItem.to_string(), "UNORDERED_LIST_ITEM");
}
