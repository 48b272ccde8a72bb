//! Graph store service
//!
//! Owns the in-memory graph, persists it through [`FileSystem`] after every
//! successful mutation, and exposes the tree operations in terms of JSON
//! payloads.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use termtree::Tree;
use tracing::{debug, error, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{DomainError, Graph, Node, TreeNodeConvert, ROOT_ID};
use crate::infrastructure::traits::FileSystem;

/// Persistent store for a single classification tree.
pub struct GraphService {
    fs: Arc<dyn FileSystem>,
    graph: Graph,
    path: PathBuf,
    pretty: bool,
}

impl GraphService {
    /// Create a fresh graph and load the configured file on top of it.
    pub fn open(fs: Arc<dyn FileSystem>, settings: &Settings) -> ApplicationResult<Self> {
        let graph = Graph::new(&settings.root_name)?;
        let mut service = Self {
            fs,
            graph,
            path: settings.graph_file.clone(),
            pretty: settings.pretty,
        };
        service.load()?;
        Ok(service)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the graph file into the root; a missing file keeps the current graph.
    pub fn load(&mut self) -> ApplicationResult<()> {
        if !self.fs.exists(&self.path) {
            info!("No graph file at {}, starting fresh", self.path.display());
            return Ok(());
        }
        let bytes = self
            .fs
            .read(&self.path)
            .with_path_context("read graph file", &self.path)?;
        if let Err(e) = self.graph.root_mut().parse(&bytes) {
            error!("Cannot parse {}: {}", self.path.display(), e);
            return Err(e.into());
        }
        debug!(
            "load: {} nodes from {}",
            self.graph.root().node_count(),
            self.path.display()
        );
        Ok(())
    }

    /// Serialize the root and write it to the graph file.
    pub fn save(&self) -> ApplicationResult<()> {
        let json = if self.pretty {
            self.graph.root().to_json_pretty()?
        } else {
            self.graph.root().to_json()?
        };
        self.fs
            .ensure_parent(&self.path)
            .with_path_context("create graph directory", &self.path)?;
        self.fs
            .write(&self.path, json.as_bytes())
            .with_path_context("write graph file", &self.path)?;
        info!("Saved graph to {}", self.path.display());
        Ok(())
    }

    /// Whole graph as JSON.
    pub fn graph_json(&self, pretty: bool) -> ApplicationResult<String> {
        let root = self.graph.root();
        let json = if pretty {
            root.to_json_pretty()?
        } else {
            root.to_json()?
        };
        Ok(json)
    }

    pub fn outline(&self) -> String {
        self.graph.root().stringify()
    }

    pub fn tree(&self) -> Tree<String> {
        self.graph.root().to_tree_string()
    }

    /// Attach the node described by `payload` under `parent_id` and return
    /// its id, generated if the payload had none.
    #[instrument(level = "debug", skip(self, payload))]
    pub fn add_child(&mut self, parent_id: &str, payload: &[u8]) -> ApplicationResult<String> {
        let node = decode_payload(payload, "newNode cannot be nil")?;
        let id = self.graph.root_mut().add_node(parent_id, node)?;
        self.save()?;
        Ok(id)
    }

    /// Attach the node described by `payload` directly under the root.
    pub fn add_to_root(&mut self, payload: &[u8]) -> ApplicationResult<String> {
        self.add_child(ROOT_ID, payload)
    }

    /// Overwrite the attributes of the node identified by the payload's id.
    #[instrument(level = "debug", skip(self, payload))]
    pub fn update_node(&mut self, parent_id: &str, payload: &[u8]) -> ApplicationResult<()> {
        let target = decode_payload(payload, "targetNode cannot be nil")?;
        self.graph.root_mut().update_node(parent_id, target)?;
        self.save()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn remove_node(&mut self, parent_id: &str, node_id: &str) -> ApplicationResult<()> {
        self.graph.root_mut().remove_node(parent_id, node_id)?;
        self.save()
    }

    /// Move a node and return the resulting graph as JSON.
    #[instrument(level = "debug", skip(self))]
    pub fn move_node(
        &mut self,
        parent_id: &str,
        node_id: &str,
        new_parent_id: &str,
    ) -> ApplicationResult<String> {
        self.graph
            .root_mut()
            .move_node(parent_id, node_id, new_parent_id)?;
        self.save()?;
        self.graph_json(false)
    }

    /// Legal new parents for `node_id`, as a JSON array of `{id, name}`.
    pub fn find_targets(&self, node_id: &str) -> ApplicationResult<String> {
        let targets = self.graph.root().find_target_nodes(node_id)?;
        to_json(&targets)
    }

    /// Subtree rooted at `id`, as JSON.
    pub fn find_node(&self, id: &str) -> ApplicationResult<String> {
        let node = self.graph.root().find_node(id)?;
        Ok(node.to_json()?)
    }

    /// Load an uploaded document into the root and persist it.
    #[instrument(level = "debug", skip(self, bytes), fields(len = bytes.len()))]
    pub fn import(&mut self, bytes: &[u8]) -> ApplicationResult<()> {
        self.graph.root_mut().parse(bytes)?;
        self.save()
    }

    /// Drop all children of the root and persist the empty graph.
    pub fn clear(&mut self) -> ApplicationResult<()> {
        self.graph.clear();
        self.save()
    }
}

/// Decode a node payload, refusing JSON `null`.
fn decode_payload(payload: &[u8], nil_message: &str) -> ApplicationResult<Node> {
    let node: Option<Node> = serde_json::from_slice(payload)
        .map_err(|e| DomainError::parsing(format!("failed to parse the node [{e}]")))?;
    node.ok_or_else(|| DomainError::illegal_argument(nil_message).into())
}

fn to_json<T: Serialize>(value: &T) -> ApplicationResult<String> {
    serde_json::to_string(value).map_err(|e| ApplicationError::OperationFailed {
        context: "serialize response".into(),
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorClass;
    use crate::infrastructure::traits::RealFileSystem;
    use tempfile::TempDir;

    fn service_in(dir: &TempDir) -> GraphService {
        let settings = Settings {
            graph_file: dir.path().join("graph.json"),
            root_name: "ens".into(),
            pretty: false,
        };
        GraphService::open(Arc::new(RealFileSystem), &settings).unwrap()
    }

    #[test]
    fn given_null_payload_when_adding_then_client_error() {
        let dir = TempDir::new().unwrap();
        let mut service = service_in(&dir);

        let err = service.add_to_root(b"null").unwrap_err();

        assert_eq!(err.to_string(), "newNode cannot be nil");
        assert_eq!(err.class(), ErrorClass::ClientError);
    }

    #[test]
    fn given_null_payload_when_updating_then_client_error() {
        let dir = TempDir::new().unwrap();
        let mut service = service_in(&dir);

        let err = service.update_node(ROOT_ID, b"null").unwrap_err();

        assert_eq!(err.to_string(), "targetNode cannot be nil");
    }

    #[test]
    fn given_garbage_payload_when_adding_then_parsing_error() {
        let dir = TempDir::new().unwrap();
        let mut service = service_in(&dir);

        let err = service.add_to_root(b"{not json").unwrap_err();

        assert!(err.to_string().starts_with("failed to parse the node ["));
        assert_eq!(err.class(), ErrorClass::Internal);
        assert!(!dir.path().join("graph.json").exists());
    }
}
