//! Tests for command line parsing

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use lexitree::cli::args::{Cli, Commands, ConfigCommands};
use lexitree::domain::NodeType;

#[test]
fn given_cli_definition_when_asserting_then_valid() {
    Cli::command().debug_assert();
}

#[test]
fn given_add_without_parent_when_parsing_then_root_is_parent() {
    let cli = Cli::try_parse_from([
        "lexitree",
        "add",
        "--name",
        "walk",
        "--type",
        "division",
        "--property",
        "gloss=to walk",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::Add { parent, node, id }) => {
            assert_eq!(parent, "0");
            assert_eq!(id, None);
            assert_eq!(node.name, "walk");
            assert_eq!(node.node_type, NodeType::Division);
            assert_eq!(node.color, "");
            assert_eq!(
                node.properties,
                vec![("gloss".to_string(), "to walk".to_string())]
            );
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_accepted() {
    let cli = Cli::try_parse_from(["lexitree", "print", "-dd", "--file", "/tmp/g.json"]).unwrap();

    assert_eq!(cli.debug, 2);
    assert_eq!(cli.file, Some(PathBuf::from("/tmp/g.json")));
    assert!(matches!(cli.command, Some(Commands::Print { tree: false })));
}

#[test]
fn given_move_when_parsing_then_three_positionals() {
    let cli = Cli::try_parse_from(["lexitree", "move", "id_D", "id_G", "id_B"]).unwrap();

    match cli.command {
        Some(Commands::Move {
            parent,
            node,
            new_parent,
        }) => {
            assert_eq!(
                (parent.as_str(), node.as_str(), new_parent.as_str()),
                ("id_D", "id_G", "id_B")
            );
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn given_unknown_type_when_parsing_then_rejected() {
    let result = Cli::try_parse_from(["lexitree", "add", "--name", "x", "--type", "category"]);
    assert!(result.is_err());
}

#[test]
fn given_property_without_equals_when_parsing_then_rejected() {
    let result = Cli::try_parse_from(["lexitree", "add", "--name", "x", "--property", "gloss"]);
    assert!(result.is_err());
}

#[test]
fn given_child_id_without_child_name_when_parsing_then_rejected() {
    let result = Cli::try_parse_from([
        "lexitree",
        "update",
        "0",
        "id_B",
        "--name",
        "B",
        "--child-id",
        "id_K",
    ]);
    assert!(result.is_err());
}

#[test]
fn given_config_path_when_parsing_then_config_subcommand() {
    let cli = Cli::try_parse_from(["lexitree", "config", "path"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Path
        })
    ));
}
