//! `sitecfg show`: print the normalized configuration.

use anyhow::Result;
use sitecfg::config::SiteConfig;
use std::path::Path;

use super::check::report_unknown_fields;

pub fn show_config(path: &Path, pretty: bool) -> Result<()> {
    let (config, ignored) = SiteConfig::load(path, false)?;
    report_unknown_fields(&ignored, path);
    println!("{}", to_json(&config, pretty)?);
    Ok(())
}

fn to_json(config: &SiteConfig, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    Ok(json)
}
