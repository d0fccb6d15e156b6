//! sitecfg - validate and inspect a blog's site configuration.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use sitecfg::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { path, dry, force } => {
            let root = match path {
                Some(path) => std::env::current_dir()?.join(path),
                None => std::env::current_dir()?,
            };
            cli::init::init_config(&root, &cli.config, *dry, *force)
        }
        Commands::Check { deny_unknown } => {
            let path = cli::resolve_config_path(&cli)?;
            cli::check::check_config(&path, *deny_unknown)
        }
        Commands::Show { pretty } => {
            let path = cli::resolve_config_path(&cli)?;
            cli::show::show_config(&path, *pretty)
        }
    }
}
