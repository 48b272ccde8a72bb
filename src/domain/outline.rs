//! Human-readable renderings: the flat dotted outline and a termtree view.

use itertools::Itertools;
use termtree::Tree;
use tracing::instrument;

use crate::domain::node::Node;

impl Node {
    /// Flat outline, one `<dotted-counter> <name>` line per node, pre-order.
    ///
    /// ```text
    /// 1 ens
    /// 1.1 B
    /// 1.1.1 F
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn stringify(&self) -> String {
        let mut out = String::new();
        let mut counters = vec![1];
        stringify_into(self, &mut counters, &mut out);
        out
    }
}

fn stringify_into(node: &Node, counters: &mut Vec<usize>, out: &mut String) {
    out.push_str(&counters.iter().join("."));
    out.push(' ');
    out.push_str(&node.name);
    out.push('\n');

    counters.push(0);
    for child in &node.children {
        if let Some(last) = counters.last_mut() {
            *last += 1;
        }
        stringify_into(child, counters, out);
    }
    counters.pop();
}

/// Conversion into a box-drawing tree for terminal display.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for Node {
    fn to_tree_string(&self) -> Tree<String> {
        let label = format!("{} [{}]", self.name, self.id);
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_tree_string()).collect();
        Tree::new(label).with_leaves(leaves)
    }
}
