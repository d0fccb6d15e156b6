//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod show;

pub use args::{Cli, Commands};

use anyhow::{Result, bail};
use sitecfg::config::find_config_file;
use std::path::PathBuf;

/// Locate the config file named by `--config`, searching upward from cwd.
pub fn resolve_config_path(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    match find_config_file(&cwd, &cli.config) {
        Some(path) => Ok(path),
        None => bail!(
            "config file '{}' not found. Run 'sitecfg init' to create one.",
            cli.config.display()
        ),
    }
}
