//! Property tests: ids stay unique under arbitrary edit sequences

use std::collections::HashSet;

use proptest::prelude::*;

use lexitree::domain::{DomainResult, Node};

/// Small id pool so that collisions and misses are frequent.
const POOL: &[&str] = &["0", "a", "b", "c", "d", "e", "f", "g"];

#[derive(Debug, Clone)]
enum Op {
    Add { parent: usize, id: Option<usize> },
    Remove { parent: usize, target: usize },
    Move { parent: usize, target: usize, new_parent: usize },
    Update { parent: usize, target: usize, child: Option<usize> },
}

fn pick() -> impl Strategy<Value = usize> {
    0..POOL.len()
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (pick(), proptest::option::of(pick())).prop_map(|(parent, id)| Op::Add { parent, id }),
        (pick(), pick()).prop_map(|(parent, target)| Op::Remove { parent, target }),
        (pick(), pick(), pick()).prop_map(|(parent, target, new_parent)| Op::Move {
            parent,
            target,
            new_parent
        }),
        (pick(), pick(), proptest::option::of(pick())).prop_map(|(parent, target, child)| {
            Op::Update {
                parent,
                target,
                child,
            }
        }),
    ]
}

fn leaf(id: Option<usize>) -> Node {
    Node {
        id: id.map(|i| POOL[i].to_string()).unwrap_or_default(),
        name: "n".into(),
        ..Node::default()
    }
}

fn apply(root: &mut Node, op: &Op) {
    // Failures are expected; only the invariant matters.
    let _ = apply_checked(root, op);
}

fn assert_unique(root: &Node) {
    let ids = root.ids();
    let distinct: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), distinct.len(), "duplicate ids in {:?}", ids);
}

proptest! {
    #[test]
    fn ids_stay_unique_under_random_edits(ops in proptest::collection::vec(op(), 0..40)) {
        let mut root = Node::lexeme("0", "ens", "").unwrap();
        for op in &ops {
            apply(&mut root, op);
            assert_unique(&root);
        }
        prop_assert_eq!(root.id.as_str(), "0");
    }

    #[test]
    fn failed_edits_leave_tree_unchanged(ops in proptest::collection::vec(op(), 0..40)) {
        let mut root = Node::lexeme("0", "ens", "").unwrap();
        for op in &ops {
            let before = root.clone();
            let failed = {
                let mut probe = root.clone();
                apply_checked(&mut probe, op).is_err()
            };
            apply(&mut root, op);
            if failed {
                prop_assert_eq!(&root, &before);
            }
        }
    }

    #[test]
    fn json_round_trip_preserves_tree(ops in proptest::collection::vec(op(), 0..30)) {
        let mut root = Node::lexeme("0", "ens", "").unwrap();
        for op in &ops {
            apply(&mut root, op);
        }
        let decoded = Node::from_json(root.to_json().unwrap().as_bytes()).unwrap();
        prop_assert_eq!(decoded, root);
    }
}

fn apply_checked(root: &mut Node, op: &Op) -> DomainResult<()> {
    match op {
        Op::Add { parent, id } => root.add_node(POOL[*parent], leaf(*id)).map(drop),
        Op::Remove { parent, target } => root.remove_node(POOL[*parent], POOL[*target]),
        Op::Move {
            parent,
            target,
            new_parent,
        } => root.move_node(POOL[*parent], POOL[*target], POOL[*new_parent]),
        Op::Update {
            parent,
            target,
            child,
        } => {
            let mut node = leaf(Some(*target));
            if child.is_some() {
                node.children.push(leaf(*child));
            }
            root.update_node(POOL[*parent], node)
        }
    }
}
