//! Shared fixtures for integration tests
#![allow(dead_code)]

use lexitree::domain::Node;
use rstest::fixture;

pub const RED: &str = "#ff0000";
pub const GREEN: &str = "#00ff00";
pub const BLU: &str = "#0000ff";
pub const YELLOW: &str = "#00ffff";

/// ```text
/// 0 ens
/// ├── id_B B
/// ├── id_C C
/// ├── id_D D (opposition)
/// │   ├── id_F F
/// │   └── id_G G
/// │       ├── id_H H (division)
/// │       └── id_I I
/// └── id_E E
/// ```
#[fixture]
pub fn sample_tree() -> Node {
    let g = Node::lexeme("id_G", "G", BLU)
        .unwrap()
        .with_child(Node::division("id_H", "H", YELLOW).unwrap())
        .with_child(Node::lexeme("id_I", "I", YELLOW).unwrap());
    let d = Node::opposition("id_D", "D", GREEN)
        .unwrap()
        .with_child(Node::lexeme("id_F", "F", BLU).unwrap())
        .with_child(g);

    Node::lexeme("0", "ens", "")
        .unwrap()
        .with_property("p1", "abc")
        .with_property("p2", "xyz")
        .with_child(Node::lexeme("id_B", "B", RED).unwrap())
        .with_child(Node::lexeme("id_C", "C", RED).unwrap())
        .with_child(d)
        .with_child(Node::lexeme("id_E", "E", GREEN).unwrap())
}

/// Ids in pre-order.
pub fn ids(root: &Node) -> Vec<String> {
    root.traverse().iter().map(|n| n.id.clone()).collect()
}
