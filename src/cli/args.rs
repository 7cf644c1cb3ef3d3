//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::domain::NodeId;

/// Ancestry and descendant queries over a parent-linked node forest with bird records
#[derive(Parser, Debug)]
#[command(name = "aviary")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (repeat for more verbosity)
    #[arg(short = 'd', long = "debug", global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Node dataset file (overrides config)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub nodes: Option<PathBuf>,

    /// Bird dataset file (overrides config)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub birds_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shared root, lowest common ancestor and depth of two nodes (JSON)
    CommonAncestor {
        /// First node id
        a: NodeId,
        /// Second node id
        b: NodeId,
    },

    /// Birds attached to all descendants of the given nodes (JSON)
    Birds {
        /// Comma-separated node ids
        node_ids: String,
    },

    /// Root-to-node ancestor path
    Path {
        /// Node id
        node: NodeId,
    },

    /// Sorted descendant closure of the given nodes
    Descendants {
        /// Comma-separated node ids
        node_ids: String,
    },

    /// Show the forest as trees
    Tree,

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

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
