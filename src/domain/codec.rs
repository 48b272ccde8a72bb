//! Structured (JSON) serialization of a node and its subtree.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{Node, NodeType};

/// Field-wise overlay decoded from a payload; absent fields keep their
/// current value. Properties are merged key by key, children replaced.
#[derive(Debug, Deserialize)]
struct NodePatch {
    id: Option<String>,
    name: Option<String>,
    #[serde(rename = "type")]
    node_type: Option<NodeType>,
    color: Option<String>,
    properties: Option<BTreeMap<String, String>>,
    children: Option<Vec<Node>>,
}

impl NodePatch {
    fn apply(self, node: &mut Node) {
        if let Some(id) = self.id {
            node.id = id;
        }
        if let Some(name) = self.name {
            node.name = name;
        }
        if let Some(node_type) = self.node_type {
            node.node_type = node_type;
        }
        if let Some(color) = self.color {
            node.color = color;
        }
        if let Some(properties) = self.properties {
            node.properties.extend(properties);
        }
        if let Some(children) = self.children {
            node.children = children;
        }
    }
}

fn marshal_error(e: serde_json::Error) -> DomainError {
    DomainError::parsing(format!("failed to marshal the node [{}]", e))
}

fn parse_error(e: serde_json::Error) -> DomainError {
    DomainError::parsing(format!("failed to parse the node [{}]", e))
}

impl Node {
    /// Compact JSON of this node and its whole subtree.
    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string(self).map_err(marshal_error)
    }

    /// Indented JSON, same content as [`Node::to_json`].
    pub fn to_json_pretty(&self) -> DomainResult<String> {
        serde_json::to_string_pretty(self).map_err(marshal_error)
    }

    /// Decode a payload into this node in place, then repair the result.
    ///
    /// Fields present in the payload overwrite the current ones, absent
    /// fields are kept. On error the node is left untouched.
    #[instrument(level = "trace", skip(self, bytes), fields(len = bytes.len()))]
    pub fn parse(&mut self, bytes: &[u8]) -> DomainResult<&mut Node> {
        let patch: Option<NodePatch> = serde_json::from_slice(bytes).map_err(parse_error)?;
        if let Some(patch) = patch {
            patch.apply(self);
        }
        let repaired = self.repair();
        if repaired > 0 {
            debug!("parse: assigned {} missing ids", repaired);
        }
        Ok(self)
    }

    /// Decode a fresh node from a payload, repaired.
    pub fn from_json(bytes: &[u8]) -> DomainResult<Node> {
        let mut node: Node = serde_json::from_slice(bytes).map_err(parse_error)?;
        node.repair();
        Ok(node)
    }
}
