//! Site configuration for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One module per TOML section
//! │   ├── author     # [author]
//! │   ├── copyright  # [copyright]
//! │   ├── feed       # [feed]
//! │   ├── heatmap    # [heatmap]
//! │   ├── i18n       # [i18n]
//! │   └── pagination # [pagination]
//! ├── types/         # ConfigError, diagnostics, FieldPath, Pattern
//! ├── util.rs        # config file discovery
//! └── mod.rs         # RawSiteConfig -> SiteConfig (this file)
//! ```
//!
//! A [`RawSiteConfig`] is what the site owner writes, either as a Rust
//! literal or as TOML. [`RawSiteConfig::build`] checks every field in one
//! pass and returns either a complete [`SiteConfig`] or every violation it
//! found. Nothing is global: the caller owns the built value and hands it
//! (or an `Arc` of it) to whatever needs it.

pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

pub use section::{
    Author, AuthorConfig, Copyright, CopyrightConfig, Feed, FeedConfig, Heatmap, HeatmapConfig,
    HeatmapUnit, I18n, I18nConfig, Pagination,
};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, Pattern, PatternError, Violation,
};

use crate::debug;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// ============================================================================
// raw configuration
// ============================================================================

// Every field has a default so partial literals and partial files parse;
// `build` decides what is actually required.

/// Site configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct RawSiteConfig {
    /// Site title.
    #[config(default = "My Blog", inline_doc)]
    pub title: String,

    /// Epigraph on the home page, may span several lines.
    pub prologue: Option<String>,

    /// One-line summary used in meta tags and feeds.
    pub description: Option<String>,

    /// Sections listed under "latest" on the home page ("*" for all).
    #[config(default = "*")]
    pub latest: Option<String>,

    #[config(sub)]
    pub author: AuthorConfig,

    #[config(sub)]
    pub copyright: CopyrightConfig,

    #[config(sub)]
    pub i18n: I18nConfig,

    /// Page size per content kind.
    #[config(hidden)]
    pub pagination: BTreeMap<String, i64>,

    #[config(sub)]
    pub heatmap: HeatmapConfig,

    #[config(sub)]
    pub feed: FeedConfig,
}

impl RawSiteConfig {
    /// Validate and normalize into a [`SiteConfig`].
    ///
    /// Pure: no I/O, and the same input always yields the same result.
    /// Fails with [`ConfigError::Invalid`] carrying every violation found.
    pub fn build(self) -> Result<SiteConfig, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        let fields = Self::FIELDS;

        diag.require(fields.title, &self.title);

        let latest = match self.latest.as_deref() {
            Some(source) => section::feed::parse_pattern(source, fields.latest, &mut diag),
            None => Some(Pattern::All),
        };

        let author = self.author.normalize(&mut diag);
        let copyright = self.copyright.normalize(&mut diag);
        let i18n = self.i18n.normalize(&mut diag);
        let pagination = Pagination::normalize(&self.pagination, &fields.pagination, &mut diag);
        let heatmap = self.heatmap.normalize(&mut diag);
        let feed = self.feed.normalize(&mut diag);

        diag.into_result().map_err(ConfigError::Invalid)?;

        let monolocale = i18n.locales.len() == 1;
        Ok(SiteConfig {
            title: self.title,
            prologue: non_blank(self.prologue),
            author,
            description: non_blank(self.description),
            copyright,
            i18n,
            pagination,
            heatmap,
            feed,
            latest: latest.unwrap_or_default(),
            monolocale,
        })
    }

    /// Parse TOML content.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Read a config file, collecting any unknown fields.
    pub fn from_path(path: &Path) -> Result<(Self, Vec<String>), ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        debug!("config"; "read {} bytes from {}", content.len(), path.display());
        Self::parse_with_ignored(&content)
    }

    /// Commented `site.toml` with every section and its defaults.
    pub fn full_template() -> String {
        let mut out = Self::template_with_header();
        out.push('\n');
        out.push_str(&section::pagination::template_with_header());
        out
    }
}

/// Build a site configuration from a raw literal.
///
/// Shorthand for [`RawSiteConfig::build`].
pub fn site_config(raw: RawSiteConfig) -> Result<SiteConfig, ConfigError> {
    raw.build()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// normalized configuration
// ============================================================================

/// Validated site configuration.
///
/// Immutable once built: fields are only reachable through accessors, so
/// `monolocale` always agrees with the locale list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    prologue: Option<String>,
    author: Author,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    copyright: Option<Copyright>,
    i18n: I18n,
    pagination: Pagination,
    heatmap: Heatmap,
    feed: Feed,
    latest: Pattern,
    monolocale: bool,
}

impl SiteConfig {
    /// Parse and build from TOML content. Unknown fields are ignored.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        RawSiteConfig::from_str(content)?.build()
    }

    /// Read, parse and build a config file.
    ///
    /// With `deny_unknown`, unknown fields fail the load; otherwise they are
    /// returned next to the config for the caller to report.
    pub fn load(path: &Path, deny_unknown: bool) -> Result<(Self, Vec<String>), ConfigError> {
        let (raw, ignored) = RawSiteConfig::from_path(path)?;
        if deny_unknown && !ignored.is_empty() {
            return Err(ConfigError::UnknownFields(ignored));
        }
        Ok((raw.build()?, ignored))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn prologue(&self) -> Option<&str> {
        self.prologue.as_deref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn copyright(&self) -> Option<&Copyright> {
        self.copyright.as_ref()
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn heatmap(&self) -> &Heatmap {
        &self.heatmap
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn latest(&self) -> &Pattern {
        &self.latest
    }

    /// `true` when the site has exactly one locale.
    pub fn monolocale(&self) -> bool {
        self.monolocale
    }

    /// Whether posts of `section` are listed under "latest".
    pub fn is_latest(&self, section: &str) -> bool {
        self.latest.matches(section)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Minimal raw config that builds: one locale, every required field set.
#[cfg(test)]
pub fn test_raw_config() -> RawSiteConfig {
    RawSiteConfig {
        title: "Test".into(),
        author: AuthorConfig {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            link: "https://example.com".into(),
        },
        i18n: I18nConfig {
            locales: vec!["en".into()],
            default_locale: "en".into(),
        },
        ..Default::default()
    }
}

/// Parse config with minimal required fields prepended to `extra`.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> RawSiteConfig {
    let config = format!(
        "title = \"Test\"\n{extra}\n\
         [author]\nname = \"Alice\"\nemail = \"alice@example.com\"\nlink = \"https://example.com\"\n"
    );
    let (parsed, ignored) = RawSiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    const KRAHSU: &str = r#"
title = "枢衡の巢"
prologue = "We are all apprentices in a craft where no one ever becomes a master. \n—- Ernest Hemingway"
description = "KraHsu's personal blog"
latest = "*"

[author]
name = "KraHsu"
email = "charles040318@gmail.mail"
link = "https://blog.krahsu.top"

[copyright]
type = "CC BY-NC-ND 4.0"
year = "2025"

[i18n]
locales = ["en", "zh-cn"]
defaultLocale = "zh-cn"

[feed]
section = "*"
limit = 20
"#;

    fn with_locales(locales: &[&str], default_locale: &str) -> RawSiteConfig {
        let mut raw = test_raw_config();
        raw.i18n = I18nConfig {
            locales: locales.iter().map(|l| l.to_string()).collect(),
            default_locale: default_locale.into(),
        };
        raw
    }

    fn invalid(raw: RawSiteConfig) -> ConfigDiagnostics {
        match raw.build() {
            Err(ConfigError::Invalid(diag)) => diag,
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_full_example() {
        let config = SiteConfig::from_str(KRAHSU).unwrap();

        assert_eq!(config.title(), "枢衡の巢");
        assert!(config.prologue().unwrap().contains('\n'));
        assert_eq!(config.author().name, "KraHsu");
        assert_eq!(config.author().email, "charles040318@gmail.mail");
        assert_eq!(config.description(), Some("KraHsu's personal blog"));
        assert_eq!(config.copyright().unwrap().kind, "CC BY-NC-ND 4.0");
        assert_eq!(config.copyright().unwrap().year.as_deref(), Some("2025"));
        assert_eq!(config.i18n().default_locale, "zh-cn");
        assert!(!config.monolocale());
        assert!(config.feed().section.is_all());
        assert_eq!(config.feed().limit.get(), 20);
        assert!(config.latest().is_all());
        assert!(config.is_latest("jotting"));
    }

    #[test]
    fn test_single_locale_is_monolocale() {
        let config = with_locales(&["zh-cn"], "zh-cn").build().unwrap();
        assert!(config.monolocale());
    }

    #[test]
    fn test_two_locales_not_monolocale() {
        let config = with_locales(&["en", "zh-cn"], "zh-cn").build().unwrap();
        assert!(!config.monolocale());
    }

    #[test]
    fn test_default_locale_must_be_listed() {
        let diag = invalid(with_locales(&["en"], "zh-cn"));
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].kind, Violation::DefaultLocaleNotListed);
    }

    #[test]
    fn test_site_config_entry_point() {
        let err = site_config(with_locales(&["en"], "zh-cn")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let config = site_config(with_locales(&["zh-cn"], "zh-cn")).unwrap();
        assert_eq!(config, with_locales(&["zh-cn"], "zh-cn").build().unwrap());
    }

    #[test]
    fn test_blank_pagination_kind_rejected() {
        let raw = test_parse_config(
            "[i18n]\nlocales = [\"en\"]\ndefault_locale = \"en\"\n[pagination]\n\"\" = 5",
        );
        let diag = invalid(raw);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].kind, Violation::Missing);
        assert_eq!(diag.errors()[0].field.as_str(), "pagination.");
    }

    #[test]
    fn test_omitted_optionals_use_defaults() {
        let config = test_raw_config().build().unwrap();

        assert_eq!(config.pagination(), &Pagination::default());
        assert_eq!(config.heatmap(), &Heatmap::default());
        assert_eq!(config.feed(), &Feed::default());
        assert_eq!(config.latest(), &Pattern::All);
        assert_eq!(config.prologue(), None);
        assert_eq!(config.description(), None);
        assert_eq!(config.copyright(), None);
    }

    #[test]
    fn test_required_fields_kept_verbatim() {
        let raw = test_raw_config();
        let config = raw.clone().build().unwrap();

        assert_eq!(config.title(), raw.title);
        assert_eq!(config.author().name, raw.author.name);
        assert_eq!(config.author().email, raw.author.email);
        assert_eq!(config.author().link, raw.author.link);
        assert_eq!(config.i18n().locales, raw.i18n.locales);
        assert_eq!(config.i18n().default_locale, raw.i18n.default_locale);
    }

    #[test]
    fn test_build_is_deterministic() {
        let raw = RawSiteConfig::from_str(KRAHSU).unwrap();
        assert_eq!(raw.clone().build().unwrap(), raw.build().unwrap());

        let bad = with_locales(&[], "en");
        assert_eq!(invalid(bad.clone()), invalid(bad));
    }

    #[test]
    fn test_every_violation_reported_at_once() {
        let mut raw = with_locales(&[], "en");
        raw.title = String::new();
        raw.pagination.insert("note".into(), 0);
        raw.feed.limit = Some(-20);
        raw.heatmap.weeks = Some(0);

        let diag = invalid(raw);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "title",
                "i18n.locales",
                "pagination.note",
                "heatmap.weeks",
                "feed.limit"
            ]
        );
        assert!(diag.contains(Violation::Missing));
        assert!(diag.contains(Violation::EmptyLocales));
        assert!(diag.contains(Violation::NonPositive));
    }

    #[test]
    fn test_blank_latest_rejected() {
        let mut raw = test_raw_config();
        raw.latest = Some(" ".into());
        let diag = invalid(raw);
        assert_eq!(diag.errors()[0].field.as_str(), "latest");
        assert_eq!(diag.errors()[0].kind, Violation::Malformed);
    }

    #[test]
    fn test_blank_optional_strings_dropped() {
        let mut raw = test_raw_config();
        raw.prologue = Some("  ".into());
        raw.description = Some(String::new());
        let config = raw.build().unwrap();
        assert_eq!(config.prologue(), None);
        assert_eq!(config.description(), None);
    }

    #[test]
    fn test_pagination_from_toml() {
        let raw = test_parse_config(
            "[i18n]\nlocales = [\"en\"]\ndefault_locale = \"en\"\n[pagination]\nnote = 30",
        );
        assert_eq!(raw.pagination.len(), 1);

        let config = raw.build().unwrap();
        assert_eq!(config.pagination().page_size("note"), NonZeroU32::new(30));
        assert_eq!(config.pagination().page_size("jotting"), NonZeroU32::new(24));
    }

    #[test]
    fn test_negative_numbers_reach_validation() {
        let raw = test_parse_config(
            "[i18n]\nlocales = [\"en\"]\ndefault_locale = \"en\"\n[feed]\nlimit = -1\n[pagination]\nnote = 0",
        );
        let diag = invalid(raw);
        assert_eq!(diag.len(), 2);
        assert!(diag.errors().iter().all(|e| e.kind == Violation::NonPositive));
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[author\nname = \"Alice\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_unknown_heatmap_unit_is_parse_error() {
        let result = RawSiteConfig::from_str("[heatmap]\nunit = \"month\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "title = \"Test\"\ntitel = \"typo\"\n[feed]\nlimt = 3";
        let (config, ignored) = RawSiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.title, "Test");
        assert!(ignored.iter().any(|f| f == "titel"));
        assert!(ignored.iter().any(|f| f == "feed.limt"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, format!("{KRAHSU}\n[extra]\nkey = 1\n")).unwrap();

        let (config, ignored) = SiteConfig::load(&path, false).unwrap();
        assert_eq!(config.title(), "枢衡の巢");
        assert_eq!(ignored, vec!["extra".to_string()]);

        let err = SiteConfig::load(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFields(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load(&dir.path().join("nope.toml"), false).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_full_template_builds() {
        let template = RawSiteConfig::full_template();
        let (raw, ignored) = RawSiteConfig::parse_with_ignored(&template).unwrap();
        assert!(ignored.is_empty(), "template has unknown fields: {:?}", ignored);

        let config = raw.build().unwrap();
        assert_eq!(config.title(), "My Blog");
        assert!(config.monolocale());
        assert_eq!(config.feed(), &Feed::default());
        assert_eq!(config.heatmap(), &Heatmap::default());
        assert_eq!(config.pagination(), &Pagination::default());
    }

    #[test]
    fn test_serialized_shape() {
        let config = with_locales(&["en", "zh-cn"], "en").build().unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["monolocale"], false);
        assert_eq!(json["feed"]["section"], "*");
        assert_eq!(json["feed"]["limit"], 20);
        assert_eq!(json["heatmap"]["unit"], "day");
        assert_eq!(json["pagination"]["note"], 15);
        assert!(json.get("prologue").is_none());
    }

    #[test]
    fn test_config_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SiteConfig>();
    }
}
