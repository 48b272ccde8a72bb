//! Move-target enumeration.

use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{MoveTarget, Node};

impl Node {
    /// Nodes to which `node_id` could be moved.
    ///
    /// Walks the tree pre-order, collecting `(id, name)` of every node but
    /// never entering the node `node_id`, which excludes it together with
    /// its whole subtree. If nothing was excluded (the input is the root, or
    /// matches no node) the result is empty.
    #[instrument(level = "trace", skip(self))]
    pub fn find_target_nodes(&self, node_id: &str) -> DomainResult<Vec<MoveTarget>> {
        if node_id.is_empty() {
            return Err(DomainError::illegal_argument("node cannot be empty"));
        }

        let mut candidates = Vec::new();
        let mut stack = vec![self];
        while let Some(current) = stack.pop() {
            candidates.push(MoveTarget::from(current));
            for child in current.children.iter().rev() {
                if child.id != node_id {
                    stack.push(child);
                }
            }
        }

        if candidates.len() == self.node_count() {
            return Ok(Vec::new());
        }
        Ok(candidates)
    }
}
