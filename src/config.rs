//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/lexitree/lexitree.toml`
//! 3. Local config: `<dir>/.lexitree.toml` (usually the working directory)
//! 4. Environment variables: `LEXITREE_*` prefix
//! 5. Explicit overrides from the command line (`--file`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

const APP_NAME: &str = "lexitree";
const GRAPH_FILE_NAME: &str = "graph.json";
const DEFAULT_ROOT_NAME: &str = "ens";

/// Raw settings for intermediate parsing.
///
/// `None` means "not specified in this layer, inherit from below".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub graph_file: Option<PathBuf>,
    pub root_name: Option<String>,
    pub pretty: Option<bool>,
}

/// Unified configuration for lexitree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// File the graph is persisted to
    pub graph_file: PathBuf,
    /// Name given to the root of a fresh graph
    pub root_name: String,
    /// Write the graph file indented
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            graph_file: default_graph_file(),
            root_name: DEFAULT_ROOT_NAME.into(),
            pretty: false,
        }
    }
}

/// Default graph file: `<XDG data dir>/lexitree/graph.json`.
fn default_graph_file() -> PathBuf {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().join(GRAPH_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from("~/.lexitree").join(GRAPH_FILE_NAME))
}

/// Get the XDG config directory for lexitree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("lexitree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".lexitree.toml")
}

/// Expand `~`, `$VAR` and `${VAR}`; unresolvable input is kept verbatim.
fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in `graph_file`.
    fn expand_paths(&mut self) {
        let expanded = expand_path(self.graph_file.to_string_lossy().as_ref());
        self.graph_file = PathBuf::from(expanded);
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            graph_file: overlay
                .graph_file
                .clone()
                .unwrap_or_else(|| self.graph_file.clone()),
            root_name: overlay
                .root_name
                .clone()
                .unwrap_or_else(|| self.root_name.clone()),
            pretty: overlay.pretty.unwrap_or(self.pretty),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory searched for `.lexitree.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply LEXITREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("LEXITREE")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("graph_file") {
            settings.graph_file = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("root_name") {
            settings.root_name = val;
        }
        if let Ok(val) = config.get_bool("pretty") {
            settings.pretty = val;
        }

        Ok(settings)
    }

    /// Replace the graph file, expanding `~` and variables.
    pub fn with_graph_file(mut self, path: &Path) -> Self {
        self.graph_file = path.to_path_buf();
        self.expand_paths();
        self
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# lexitree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/lexitree/lexitree.toml
#   Local:  ./.lexitree.toml
#   Env:    LEXITREE_* environment variables (e.g. LEXITREE_GRAPH_FILE)
#   CLI:    --file <PATH>

# File the graph is stored in
# graph_file = "~/.local/share/lexitree/graph.json"

# Name of the root node of a fresh graph
# root_name = "ens"

# Indent the stored JSON
# pretty = false
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
