//! Service container for dependency injection
//!
//! Wires up services with their dependencies.

use std::path::Path;
use std::sync::Arc;

use crate::application::services::GraphService;
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::infrastructure::error::{InfraError, InfraResult};
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding settings and I/O boundaries shared by services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, fs }
    }

    /// Open the graph store configured in `settings`.
    pub fn graph_service(&self) -> ApplicationResult<GraphService> {
        GraphService::open(Arc::clone(&self.fs), &self.settings)
    }

    /// Read a document named by the user, e.g. for `import`.
    pub fn read_input(&self, path: &Path) -> InfraResult<Vec<u8>> {
        self.fs
            .read(path)
            .map_err(|e| InfraError::file("read import file", path, e))
    }
}
