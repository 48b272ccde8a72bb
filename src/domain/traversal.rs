//! Depth-first traversal and the explicit repair pass.

use tracing::instrument;
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult, NodeRole};
use crate::domain::node::Node;

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Pre-order iterator over a subtree, children visited left to right.
pub struct Traversal<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Traversal<'a> {
    fn new(root: &'a Node) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in current.children.iter().rev() {
            self.stack.push(child);
        }
        Some(current)
    }
}

impl Node {
    /// Lazy pre-order walk starting at (and including) this node.
    pub fn iter(&self) -> Traversal<'_> {
        Traversal::new(self)
    }

    /// All nodes reachable from this one, pre-order. Does not modify the tree.
    #[instrument(level = "trace", skip(self))]
    pub fn traverse(&self) -> Vec<&Node> {
        self.iter().collect()
    }

    /// Number of nodes in this subtree, including this node.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.iter().any(|node| node.id == id)
    }

    /// Ids of every node in this subtree, pre-order.
    pub fn ids(&self) -> Vec<&str> {
        self.iter().map(|node| node.id.as_str()).collect()
    }

    /// Assign fresh ids to descendants that have none.
    ///
    /// The node itself is left alone; only children (recursively) are
    /// touched. Returns how many ids were assigned. Type, properties and
    /// children defaults are guaranteed by the types themselves.
    #[instrument(level = "trace", skip(self))]
    pub fn repair(&mut self) -> usize {
        let mut repaired = 0;
        let mut stack: Vec<&mut Node> = vec![self];
        while let Some(node) = stack.pop() {
            for child in node.children.iter_mut() {
                if child.id.is_empty() {
                    child.id = fresh_id();
                    repaired += 1;
                }
                stack.push(child);
            }
        }
        repaired
    }

    /// Repair a node about to be attached as a child: its own id is
    /// filled in too, not just its descendants'.
    pub(crate) fn repair_as_child(&mut self) -> usize {
        let mut repaired = 0;
        if self.id.is_empty() {
            self.id = fresh_id();
            repaired += 1;
        }
        repaired + self.repair()
    }

    /// Find the first node in traversal order with the given id.
    #[instrument(level = "trace", skip(self))]
    pub fn find_node(&self, id: &str) -> DomainResult<&Node> {
        if id.is_empty() {
            return Err(DomainError::illegal_argument("id cannot be empty"));
        }
        self.iter()
            .find(|node| node.id == id)
            .ok_or_else(|| DomainError::not_found(NodeRole::Node, id))
    }

    /// Mutable counterpart of [`Node::find_node`].
    #[instrument(level = "trace", skip(self))]
    pub fn find_node_mut(&mut self, id: &str) -> DomainResult<&mut Node> {
        if id.is_empty() {
            return Err(DomainError::illegal_argument("id cannot be empty"));
        }
        self.lookup_mut(id)
            .ok_or_else(|| DomainError::not_found(NodeRole::Node, id))
    }

    /// Pre-order search returning a mutable reference.
    pub(crate) fn lookup_mut(&mut self, id: &str) -> Option<&mut Node> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.lookup_mut(id))
    }
}
