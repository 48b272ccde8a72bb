//! Domain-level errors (no external dependencies)

use std::fmt;

use thiserror::Error;

/// Which lookup failed when a node id could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Node,
    Parent,
    Target,
    NewParent,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeRole::Node => "node",
            NodeRole::Parent => "parent node",
            NodeRole::Target => "target node",
            NodeRole::NewParent => "new parent node",
        };
        f.write_str(label)
    }
}

/// Coarse classification used by adapters to pick a response class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The caller sent something invalid (bad argument, id collision).
    ClientError,
    /// The referenced node does not exist.
    NotFound,
    /// Anything else.
    Internal,
}

/// Domain errors represent violations of the tree invariants or bad input.
/// All of them are local and non-retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    IllegalArgument(String),

    #[error("duplicated ID {0:?}")]
    DuplicatedNode(String),

    #[error("the {role} with ID {id:?} was not found")]
    NodeNotFound { role: NodeRole, id: String },

    #[error("{0}")]
    Parsing(String),
}

impl DomainError {
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument(message.into())
    }

    pub fn duplicated(id: impl Into<String>) -> Self {
        Self::DuplicatedNode(id.into())
    }

    pub fn not_found(role: NodeRole, id: impl Into<String>) -> Self {
        Self::NodeNotFound {
            role,
            id: id.into(),
        }
    }

    pub fn parsing(message: impl Into<String>) -> Self {
        Self::Parsing(message.into())
    }

    /// Error for a move whose new parent sits inside the moved subtree.
    pub fn cannot_move_to_child(target: &str, new_parent: &str) -> Self {
        Self::IllegalArgument(format!(
            "the node {:?} cannot be moved to its child {:?}",
            target, new_parent
        ))
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            DomainError::IllegalArgument(_) | DomainError::DuplicatedNode(_) => {
                ErrorClass::ClientError
            }
            DomainError::NodeNotFound { .. } => ErrorClass::NotFound,
            DomainError::Parsing(_) => ErrorClass::Internal,
        }
    }
}

/// Result type for tree operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_not_found_error_when_displayed_then_names_role_and_quoted_id() {
        let err = DomainError::not_found(NodeRole::NewParent, "id_Z");
        assert_eq!(
            err.to_string(),
            "the new parent node with ID \"id_Z\" was not found"
        );
    }

    #[test]
    fn given_move_to_child_error_when_displayed_then_quotes_both_ids() {
        let err = DomainError::cannot_move_to_child("id_G", "id_H");
        assert_eq!(
            err.to_string(),
            "the node \"id_G\" cannot be moved to its child \"id_H\""
        );
    }

    #[test]
    fn given_each_kind_when_classified_then_maps_to_response_class() {
        assert_eq!(
            DomainError::illegal_argument("x").class(),
            ErrorClass::ClientError
        );
        assert_eq!(DomainError::duplicated("x").class(), ErrorClass::ClientError);
        assert_eq!(
            DomainError::not_found(NodeRole::Node, "x").class(),
            ErrorClass::NotFound
        );
        assert_eq!(DomainError::parsing("x").class(), ErrorClass::Internal);
    }
}
