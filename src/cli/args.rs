//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::domain::NodeType;

/// Classification tree store: build, reshape and print a lexical taxonomy
#[derive(Parser, Debug)]
#[command(name = "lexitree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Graph file (overrides configuration)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the graph as JSON
    Show {
        /// Indent the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the numbered outline
    Print {
        /// Box-drawing tree with ids instead
        #[arg(short, long)]
        tree: bool,
    },

    /// Add a node (under the root unless --parent is given)
    Add {
        /// Parent node id
        #[arg(short, long, default_value = crate::domain::ROOT_ID)]
        parent: String,
        #[command(flatten)]
        node: NodeArgs,
        /// Node id (generated when omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// Overwrite a node's attributes, optionally appending one child
    Update {
        /// Parent of the node
        parent: String,
        /// Node id
        id: String,
        #[command(flatten)]
        node: NodeArgs,
        /// Name of a child to append
        #[arg(long)]
        child_name: Option<String>,
        /// Id of the appended child (generated when omitted)
        #[arg(long, requires = "child_name")]
        child_id: Option<String>,
        /// Type of the appended child
        #[arg(long, requires = "child_name")]
        child_type: Option<NodeType>,
    },

    /// Remove a node and its subtree
    Remove {
        /// Parent of the node
        parent: String,
        /// Node id
        node: String,
    },

    /// Move a node under a new parent
    Move {
        /// Current parent
        parent: String,
        /// Node id
        node: String,
        /// New parent
        new_parent: String,
    },

    /// List the nodes a node may be moved under
    Targets {
        /// Node id
        node: String,
    },

    /// Print the subtree rooted at a node as JSON
    Find {
        /// Node id
        id: String,
    },

    /// Replace the graph with a JSON document
    Import {
        /// JSON file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Remove every node except the root
    Clear,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Attributes shared by `add` and `update`.
#[derive(Args, Debug)]
pub struct NodeArgs {
    /// Display name
    #[arg(short, long)]
    pub name: String,

    /// lexeme, division or opposition
    #[arg(short = 't', long = "type", default_value_t)]
    pub node_type: NodeType,

    /// Display color, e.g. "#ff0000"
    #[arg(short, long, default_value = "")]
    pub color: String,

    /// Property as key=value, repeatable
    #[arg(long = "property", value_parser = parse_key_val)]
    pub properties: Vec<(String, String)>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Print a config template
    Template,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid key=value: no `=` found in `{s}`"))?;
    if key.is_empty() {
        return Err(format!("invalid key=value: empty key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
