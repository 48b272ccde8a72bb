//! Structural edits: add, remove, move and update.
//!
//! Every operation either succeeds completely or leaves the tree untouched.
//! Id uniqueness is checked at insertion time; the move guard keeps the
//! structure acyclic.

use std::collections::HashSet;

use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult, NodeRole};
use crate::domain::node::{or_default_color, Node};

impl Node {
    /// Append `new_node` (with its subtree) to the children of `parent_id`.
    ///
    /// `new_node` and its descendants are given fresh ids where missing.
    /// Fails with `DuplicatedNode` if any id of the incoming subtree already
    /// exists, and with `NodeNotFound` if the parent is absent. Returns the
    /// id the node was stored under.
    #[instrument(level = "trace", skip(self, new_node), fields(new_id = %new_node.id))]
    pub fn add_node(&mut self, parent_id: &str, mut new_node: Node) -> DomainResult<String> {
        new_node.repair_as_child();
        self.ensure_unique(&new_node)?;

        let parent = self
            .lookup_mut(parent_id)
            .ok_or_else(|| DomainError::not_found(NodeRole::Parent, parent_id))?;
        let id = new_node.id.clone();
        parent.children.push(new_node);
        Ok(id)
    }

    /// Detach the direct child `target_id` of `parent_id`, dropping its subtree.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_node(&mut self, parent_id: &str, target_id: &str) -> DomainResult<()> {
        let parent = self
            .lookup_mut(parent_id)
            .ok_or_else(|| DomainError::not_found(NodeRole::Parent, parent_id))?;
        let position = parent
            .child_position(target_id)
            .ok_or_else(|| DomainError::not_found(NodeRole::Target, target_id))?;
        parent.children.remove(position);
        Ok(())
    }

    /// Move the direct child `target_id` of `parent_id` under `new_parent_id`.
    ///
    /// A move to the current parent is a no-op and skips all validation.
    /// The new parent must not be the target itself or any node of its
    /// subtree.
    #[instrument(level = "trace", skip(self))]
    pub fn move_node(
        &mut self,
        parent_id: &str,
        target_id: &str,
        new_parent_id: &str,
    ) -> DomainResult<()> {
        if parent_id == new_parent_id {
            return Ok(());
        }

        let parent = self
            .iter()
            .find(|node| node.id == parent_id)
            .ok_or_else(|| DomainError::not_found(NodeRole::Parent, parent_id))?;
        let target = parent
            .children
            .iter()
            .find(|child| child.id == target_id)
            .ok_or_else(|| DomainError::not_found(NodeRole::Target, target_id))?;
        if target.id == new_parent_id {
            return Err(DomainError::illegal_argument(format!(
                "the node {:?} cannot be moved into itself",
                target_id
            )));
        }
        if target.contains(new_parent_id) {
            return Err(DomainError::cannot_move_to_child(target_id, new_parent_id));
        }
        if !self.contains(new_parent_id) {
            return Err(DomainError::not_found(NodeRole::NewParent, new_parent_id));
        }

        let parent = self
            .lookup_mut(parent_id)
            .ok_or_else(|| DomainError::not_found(NodeRole::Parent, parent_id))?;
        let position = parent
            .child_position(target_id)
            .ok_or_else(|| DomainError::not_found(NodeRole::Target, target_id))?;
        let detached = parent.children.remove(position);

        match self.lookup_mut(new_parent_id) {
            Some(new_parent) => {
                new_parent.children.push(detached);
                Ok(())
            }
            None => {
                // Unreachable after the checks above; put the node back.
                if let Some(parent) = self.lookup_mut(parent_id) {
                    parent.children.insert(position, detached);
                }
                Err(DomainError::not_found(NodeRole::NewParent, new_parent_id))
            }
        }
    }

    /// Overwrite the direct child of `parent_id` whose id equals `target.id`.
    ///
    /// Name, type, color and properties are replaced (properties entirely,
    /// no merge). When `target` carries exactly one child, that child is
    /// appended to the updated node after an id uniqueness check.
    #[instrument(level = "trace", skip(self, target), fields(target_id = %target.id))]
    pub fn update_node(&mut self, parent_id: &str, target: Node) -> DomainResult<()> {
        let Node {
            id: target_id,
            name,
            node_type,
            color,
            properties,
            mut children,
        } = target;

        let parent = self
            .iter()
            .find(|node| node.id == parent_id)
            .ok_or_else(|| DomainError::not_found(NodeRole::Parent, parent_id))?;
        let position = parent
            .child_position(&target_id)
            .ok_or_else(|| DomainError::not_found(NodeRole::Target, &target_id))?;

        let new_child = if children.len() == 1 {
            let mut child = children.remove(0);
            child.repair_as_child();
            self.ensure_unique(&child)?;
            Some(child)
        } else {
            None
        };

        let parent = self
            .lookup_mut(parent_id)
            .ok_or_else(|| DomainError::not_found(NodeRole::Parent, parent_id))?;
        let matched = &mut parent.children[position];
        matched.name = name;
        matched.node_type = node_type;
        matched.color = or_default_color(color);
        matched.properties = properties;
        if let Some(child) = new_child {
            matched.children.push(child);
        }
        Ok(())
    }

    fn child_position(&self, id: &str) -> Option<usize> {
        self.children.iter().position(|child| child.id == id)
    }

    /// Reject `incoming` if it repeats an id of this tree or of itself.
    fn ensure_unique(&self, incoming: &Node) -> DomainResult<()> {
        let mut seen: HashSet<&str> = self.iter().map(|node| node.id.as_str()).collect();
        for node in incoming.iter() {
            if !seen.insert(node.id.as_str()) {
                return Err(DomainError::duplicated(node.id.clone()));
            }
        }
        Ok(())
    }
}
