//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::NodeId;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::NodeStore;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::CommonAncestor { a, b }) => _common_ancestor(cli, *a, *b),
        Some(Commands::Birds { node_ids }) => _birds(cli, node_ids),
        Some(Commands::Path { node }) => _path(cli, *node),
        Some(Commands::Descendants { node_ids }) => _descendants(cli, node_ids),
        Some(Commands::Tree) => _tree(cli),
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

fn container(cli: &Cli) -> CliResult<ServiceContainer> {
    let settings = Settings::load()?
        .with_overrides(cli.nodes.clone(), cli.birds_file.clone());
    debug!("settings: {settings:?}");
    Ok(ServiceContainer::from_settings(settings)?)
}

/// Parse a comma-separated id list. Whitespace around ids and empty segments
/// are tolerated; non-numeric tokens are a usage error.
fn parse_node_ids(raw: &str) -> CliResult<Vec<NodeId>> {
    let mut ids = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let id = token
            .parse::<NodeId>()
            .map_err(|_| CliError::InvalidArgs(format!("not a node id: {token:?}")))?;
        ids.push(id);
    }
    if ids.is_empty() {
        return Err(CliError::InvalidArgs(
            "expected at least one node id".to_string(),
        ));
    }
    Ok(ids)
}

fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string(value).map_err(|e| {
        CliError::from(ApplicationError::OperationFailed {
            context: "serialize response".to_string(),
            source: Box::new(e),
        })
    })
}

#[instrument(skip(cli))]
fn _common_ancestor(cli: &Cli, a: NodeId, b: NodeId) -> CliResult<()> {
    let container = container(cli)?;
    let result = container.ancestry.common_ancestor(a, b)?;
    output::info(&to_json(&result)?);
    Ok(())
}

#[instrument(skip(cli))]
fn _birds(cli: &Cli, node_ids: &str) -> CliResult<()> {
    let ids = parse_node_ids(node_ids)?;
    let container = container(cli)?;
    let birds = container.birds.for_all_descendants_of(&ids)?;
    output::info(&to_json(&birds)?);
    Ok(())
}

#[instrument(skip(cli))]
fn _path(cli: &Cli, node: NodeId) -> CliResult<()> {
    let container = container(cli)?;
    let path = container.ancestry.ancestor_path(node)?;
    output::info(&path.iter().join(" -> "));
    Ok(())
}

#[instrument(skip(cli))]
fn _descendants(cli: &Cli, node_ids: &str) -> CliResult<()> {
    let ids = parse_node_ids(node_ids)?;
    let container = container(cli)?;
    for id in container.birds.descendant_ids(&ids)? {
        output::info(&id);
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _tree(cli: &Cli) -> CliResult<()> {
    let container = container(cli)?;
    let store = container.store.as_ref();
    for root in store.roots().map_err(ApplicationError::from)? {
        output::info(&subtree(store, root)?);
    }
    Ok(())
}

fn subtree(store: &dyn NodeStore, id: NodeId) -> CliResult<Tree<String>> {
    let children = store.children(id).map_err(ApplicationError::from)?;
    let leaves = children
        .into_iter()
        .map(|child| subtree(store, child))
        .collect::<CliResult<Vec<_>>>()?;
    Ok(Tree::new(id.to_string()).with_leaves(leaves))
}

fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?
                .with_overrides(cli.nodes.clone(), cli.birds_file.clone());
            let rendered = toml::to_string(&settings).map_err(|e| {
                CliError::from(ApplicationError::OperationFailed {
                    context: "render settings".to_string(),
                    source: Box::new(e),
                })
            })?;
            output::info(&rendered);
        }
        ConfigCommands::Path => {
            output::header("Config paths");
            match global_config_path() {
                Some(path) => output::detail(&format!("global: {}", path.display())),
                None => output::detail("global: <no home directory>"),
            }
            output::detail("env:    AVIARY_NODES_FILE, AVIARY_BIRDS_FILE");
        }
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_list_tolerates_whitespace_and_empty_segments() {
        assert_eq!(parse_node_ids("1, 2,,3").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn non_numeric_token_is_a_usage_error() {
        let err = parse_node_ids("1,abc").unwrap_err();
        assert!(matches!(err, CliError::InvalidArgs(_)));
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn empty_list_is_a_usage_error() {
        assert!(matches!(
            parse_node_ids(" , "),
            Err(CliError::InvalidArgs(_))
        ));
    }
}
