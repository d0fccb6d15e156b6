//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Site configuration checker for multilingual blogs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the site configuration
    #[command(visible_alias = "c")]
    Check {
        /// Fail when the config file contains unknown fields
        #[arg(long)]
        deny_unknown: bool,
    },

    /// Print the normalized configuration as JSON
    #[command(visible_alias = "s")]
    Show {
        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Write a commented starter config
    #[command(visible_alias = "i")]
    Init {
        /// Directory to create the config in (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        path: Option<PathBuf>,

        /// Print the template instead of writing it
        #[arg(long)]
        dry: bool,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}
