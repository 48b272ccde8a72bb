//! Command dispatch: each subcommand opens the graph store and runs one
//! operation against it.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, NodeArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::Node;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        Cli::command()
            .print_help()
            .map_err(InfraError::Terminal)?;
        return Ok(());
    };

    match command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Commands::Config { command } => cmd_config(cli, command),
        _ => {
            let container = ServiceContainer::new(load_settings(cli)?);
            run_graph_command(&container, command)
        }
    }
}

/// Layered settings, with `--file` on top.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let cwd = std::env::current_dir().map_err(InfraError::WorkingDir)?;
    let settings = Settings::load(Some(cwd.as_path()))?;
    Ok(match &cli.file {
        Some(path) => settings.with_graph_file(path),
        None => settings,
    })
}

#[instrument(level = "debug", skip(container))]
fn run_graph_command(container: &ServiceContainer, command: &Commands) -> CliResult<()> {
    let mut service = container.graph_service()?;
    debug!("graph file: {}", service.path().display());
    match command {
        Commands::Show { pretty } => {
            output::data(&service.graph_json(*pretty)?);
        }
        Commands::Print { tree } => {
            if *tree {
                output::data(&service.tree());
            } else {
                print!("{}", service.outline());
            }
        }
        Commands::Add { parent, node, id } => {
            let new_node = node_from_args(id.clone().unwrap_or_default(), node);
            let added = service.add_child(parent, new_node.to_json()?.as_bytes())?;
            output::done(&format!("added {} [{}] under {}", node.name, added, parent));
        }
        Commands::Update {
            parent,
            id,
            node,
            child_name,
            child_id,
            child_type,
        } => {
            let mut target = node_from_args(id.clone(), node);
            if let Some(name) = child_name {
                target.children.push(Node {
                    id: child_id.clone().unwrap_or_default(),
                    name: name.clone(),
                    node_type: child_type.unwrap_or_default(),
                    ..Node::default()
                });
            }
            service.update_node(parent, target.to_json()?.as_bytes())?;
            output::done(&format!("updated {}", id));
        }
        Commands::Remove { parent, node } => {
            service.remove_node(parent, node)?;
            output::done(&format!("removed {} from {}", node, parent));
        }
        Commands::Move {
            parent,
            node,
            new_parent,
        } => {
            service.move_node(parent, node, new_parent)?;
            output::done(&format!("moved {} from {} to {}", node, parent, new_parent));
        }
        Commands::Targets { node } => {
            output::data(&service.find_targets(node)?);
        }
        Commands::Find { id } => {
            output::data(&service.find_node(id)?);
        }
        Commands::Import { file } => {
            let bytes = container.read_input(file)?;
            service.import(&bytes)?;
            output::done(&format!(
                "imported {} nodes into {}",
                service.graph().root().node_count(),
                service.path().display()
            ));
        }
        Commands::Clear => {
            service.clear()?;
            output::done("graph cleared");
        }
        Commands::Config { .. } | Commands::Completion { .. } => {
            return Err(CliError::Usage(
                "command does not operate on the graph".into(),
            ));
        }
    }
    Ok(())
}

fn node_from_args(id: String, args: &NodeArgs) -> Node {
    Node {
        id,
        name: args.name.clone(),
        node_type: args.node_type,
        color: args.color.clone(),
        properties: args.properties.iter().cloned().collect(),
        children: Vec::new(),
    }
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            print!("{}", settings.to_toml()?);
        }
        ConfigCommands::Path => {
            output::config_file("global", global_config_path().as_deref());
            let cwd = std::env::current_dir().map_err(InfraError::WorkingDir)?;
            output::config_file("local", Some(local_config_path(&cwd).as_path()));
        }
        ConfigCommands::Template => {
            print!("{}", Settings::template());
        }
    }
    Ok(())
}
