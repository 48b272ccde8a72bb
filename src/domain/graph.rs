//! Graph: owning wrapper around the root node.

use crate::domain::error::DomainResult;
use crate::domain::node::{Node, DEFAULT_COLOR, ROOT_ID};

/// Holds the root of the classification tree.
///
/// The root always carries id [`ROOT_ID`] on creation; payloads loaded into it
/// later may change that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    root: Node,
}

impl Graph {
    /// Create a graph whose root is a lexeme named `root_name`.
    pub fn new(root_name: &str) -> DomainResult<Self> {
        let root = Node::lexeme(ROOT_ID, root_name, DEFAULT_COLOR)?;
        Ok(Self { root })
    }

    pub fn from_root(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Drop every child of the root, keeping the root itself.
    pub fn clear(&mut self) -> &mut Self {
        self.root.children.clear();
        self
    }
}
