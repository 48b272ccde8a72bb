//! Tests for the JSON wire format

mod common;

use common::{ids, sample_tree};
use lexitree::domain::{ErrorClass, Node, NodeType, DEFAULT_COLOR};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn given_sample_tree_when_round_tripping_then_equal(sample_tree: Node) {
    let json = sample_tree.to_json().unwrap();

    let mut decoded = Node::default();
    decoded.parse(json.as_bytes()).unwrap();

    assert_eq!(decoded, sample_tree);
    assert_eq!(ids(&decoded), ids(&sample_tree));
}

#[rstest]
fn given_pretty_output_when_parsing_then_same_as_compact(sample_tree: Node) {
    let compact = Node::from_json(sample_tree.to_json().unwrap().as_bytes()).unwrap();
    let pretty = Node::from_json(sample_tree.to_json_pretty().unwrap().as_bytes()).unwrap();

    assert_eq!(compact, pretty);
}

#[test]
fn given_leaf_when_serializing_then_empty_collections_written() {
    let node = Node::lexeme("id_X", "X", "").unwrap();

    let value: serde_json::Value = serde_json::from_str(&node.to_json().unwrap()).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "id": "id_X",
            "name": "X",
            "type": "lexeme",
            "color": DEFAULT_COLOR,
            "properties": {},
            "children": []
        })
    );
}

#[test]
fn given_document_without_ids_when_parsing_then_children_get_ids() {
    let mut root = Node::lexeme("0", "ens", "").unwrap();
    let payload = br#"{"id":"0","name":"ens","children":[{"name":"A","children":[{"name":"A1"}]}]}"#;

    root.parse(payload).unwrap();

    let a = &root.children[0];
    assert!(!a.id.is_empty());
    assert!(!a.children[0].id.is_empty());
    assert_ne!(a.id, a.children[0].id);
}

#[test]
fn given_null_and_empty_type_when_parsing_then_lexeme() {
    let node = Node::from_json(br#"{"id":"a","name":"A","type":null}"#).unwrap();
    assert_eq!(node.node_type, NodeType::Lexeme);

    let node = Node::from_json(br#"{"id":"a","name":"A","type":""}"#).unwrap();
    assert_eq!(node.node_type, NodeType::Lexeme);
}

#[test]
fn given_unknown_fields_when_parsing_then_ignored() {
    let node = Node::from_json(br#"{"id":"a","name":"A","weight":3}"#).unwrap();
    assert_eq!(node.name, "A");
}

#[rstest]
#[case(b"{\"id\":")]
#[case(b"[1,2,3]")]
#[case(b"{\"id\":\"a\",\"type\":\"category\"}")]
fn given_malformed_payload_when_parsing_then_error_and_node_untouched(
    sample_tree: Node,
    #[case] payload: &[u8],
) {
    let mut node = sample_tree.clone();

    let err = node.parse(payload).unwrap_err();

    assert!(
        err.to_string().starts_with("failed to parse the node ["),
        "unexpected message: {}",
        err
    );
    assert_eq!(err.class(), ErrorClass::Internal);
    assert_eq!(node, sample_tree);
}

#[rstest]
fn given_null_document_when_parsing_then_node_unchanged(sample_tree: Node) {
    let mut node = sample_tree.clone();

    node.parse(b"null").unwrap();

    assert_eq!(node, sample_tree);
}
