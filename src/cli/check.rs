//! `sitecfg check`: build the config and report the outcome.

use anyhow::{Result, bail};
use sitecfg::config::SiteConfig;
use sitecfg::{debug, log};
use std::path::Path;

pub fn check_config(path: &Path, deny_unknown: bool) -> Result<()> {
    let config = match SiteConfig::load(path, deny_unknown) {
        Ok((config, ignored)) => {
            report_unknown_fields(&ignored, path);
            config
        }
        Err(e) => {
            let Some(diag) = e.diagnostics() else {
                return Err(e.into());
            };
            for err in diag.errors() {
                debug!("check"; "{} ({})", err.field.as_str(), err.kind.label());
            }
            eprintln!("{diag}");
            bail!("{} is invalid", display_name(path));
        }
    };

    log!("ok"; "{}", summary(&config));
    Ok(())
}

/// Warn about fields the config file has but nothing reads.
pub fn report_unknown_fields(fields: &[String], path: &Path) {
    if fields.is_empty() {
        return;
    }
    log!("warning"; "unknown fields in {}, ignoring:", display_name(path));
    for field in fields {
        eprintln!("- {}", field);
    }
}

/// One line describing a valid config.
pub fn summary(config: &SiteConfig) -> String {
    let i18n = config.i18n();
    let locales = if config.monolocale() {
        format!("single locale {}", i18n.default_locale)
    } else {
        format!(
            "{} locales ({}), default {}",
            i18n.locales.len(),
            i18n.locales.join(", "),
            i18n.default_locale
        )
    };
    format!(
        "\"{}\" by {}: {}, feed {} x{}",
        config.title(),
        config.author().name,
        locales,
        config.feed().section,
        config.feed().limit
    )
}

// Show only the filename since the config normally sits at the site root
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
