//! `sitecfg init`: write a commented starter config.

use anyhow::{Context, Result, bail};
use sitecfg::RawSiteConfig;
use sitecfg::log;
use std::{fs, path::Path};

/// Generate site.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = format!(
        "# Site configuration (sitecfg v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&RawSiteConfig::full_template());
    out
}

/// Write the template as `config_name` under `root`, or print it with `dry`.
pub fn init_config(root: &Path, config_name: &Path, dry: bool, force: bool) -> Result<()> {
    let content = generate_config_template();
    if dry {
        print!("{content}");
        return Ok(());
    }

    let path = root.join(config_name);
    if path.exists() && !force {
        bail!(
            "'{}' already exists, pass --force to overwrite",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
