//! Node entity: the recursive element of the classification tree

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::error::{DomainError, DomainResult};

/// Color assigned to nodes created or updated without one.
pub const DEFAULT_COLOR: &str = "#dddddd";

/// Id of the root node anchoring every graph.
pub const ROOT_ID: &str = "0";

/// Role of a node in the taxonomy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    #[default]
    Lexeme,
    Division,
    Opposition,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Lexeme => "lexeme",
            NodeType::Division => "division",
            NodeType::Opposition => "opposition",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = DomainError;

    /// An empty tag means "unset" and falls back to lexeme.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "lexeme" => Ok(NodeType::Lexeme),
            "division" => Ok(NodeType::Division),
            "opposition" => Ok(NodeType::Opposition),
            other => Err(DomainError::illegal_argument(format!(
                "unknown node type {:?}",
                other
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for NodeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(NodeType::Lexeme),
            Some(tag) => tag.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single entity of the classification tree.
///
/// Each node exclusively owns its children; there are no parent pointers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique id across the whole tree, empty until repaired
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Taxonomy role
    #[serde(rename = "type", default)]
    pub node_type: NodeType,
    /// Display hint, e.g. "#ff0000"
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
    /// Free-form key/value attributes
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: BTreeMap<String, String>,
    /// Ordered children, presentation order
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node of the given type.
    ///
    /// Id and name must not be empty; an empty color falls back to
    /// [`DEFAULT_COLOR`].
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        node_type: NodeType,
    ) -> DomainResult<Self> {
        let id = id.into();
        let name = name.into();
        let color = color.into();
        if id.is_empty() {
            return Err(DomainError::illegal_argument("id cannot be empty"));
        }
        if name.is_empty() {
            return Err(DomainError::illegal_argument("name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            node_type,
            color: or_default_color(color),
            properties: BTreeMap::new(),
            children: Vec::new(),
        })
    }

    pub fn division(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(id, name, color, NodeType::Division)
    }

    pub fn lexeme(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(id, name, color, NodeType::Lexeme)
    }

    pub fn opposition(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(id, name, color, NodeType::Opposition)
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`Node::set_property`].
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(name, value);
        self
    }

    /// Builder-style append of a child, no uniqueness check.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.id, self.node_type)
    }
}

pub(crate) fn or_default_color(color: String) -> String {
    if color.is_empty() {
        DEFAULT_COLOR.to_string()
    } else {
        color
    }
}

/// Candidate new parent for a move: just enough to present a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTarget {
    pub id: String,
    pub name: String,
}

impl MoveTarget {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<&Node> for MoveTarget {
    fn from(node: &Node) -> Self {
        Self::new(node.id.clone(), node.name.clone())
    }
}
