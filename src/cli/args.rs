//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use clap_complete::Shell;

/// Personal toolkit for algorithmic coding-problem solutions
#[derive(Parser, Debug)]
#[command(name = "rskata")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging; repeat for more verbosity (-d -d -d)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Solutions directory (default: from config)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub solutions_dir: Option<PathBuf>,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Show author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Binary tree fixtures
    Tree {
        #[command(subcommand)]
        command: TreeCommands,
    },

    /// Linked list fixtures
    List {
        #[command(subcommand)]
        command: ListCommands,
    },

    /// Query the problem catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },

    /// Interactively pick a problem and show its metadata
    Pick,

    /// Open the solution file for a problem in the editor
    Edit {
        /// Problem id (e.g. p0001)
        id: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Tree subcommands
#[derive(Subcommand, Debug)]
pub enum TreeCommands {
    /// Build a tree from level-order tokens and render it
    Build {
        /// Node tokens: integers or null/#/empty markers, comma- or space-separated
        tokens: Vec<String>,
    },
    /// Render the 15-node reference tree
    Demo,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
    /// Build a linked list from integer values
    Build {
        /// Node values in chain order
        values: Vec<i32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List problems, optionally filtered
    List {
        /// Only problems carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
        /// Only problems of this difficulty (easy|medium|hard)
        #[arg(long)]
        difficulty: Option<String>,
    },

    /// Show one problem's metadata
    Show {
        /// Problem id (e.g. p0001)
        id: String,
    },

    /// Pair catalog entries with solution files
    Status,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration as TOML
    Show,
    /// Show config file locations
    Path,
    /// Write a config template to the global location
    Init,
}
