//! `[feed]` section: which posts end up in the RSS/Atom feed.

use super::positive;
use crate::config::{ConfigDiagnostics, Pattern, PatternError, Violation};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

pub const DEFAULT_FEED_LIMIT: u32 = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "feed")]
pub struct FeedConfig {
    /// Sections included in the feed ("*" for all, `*` wildcards allowed).
    #[config(default = "*", inline_doc)]
    pub section: Option<String>,

    /// Maximum number of entries.
    #[config(default = "20", inline_doc)]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feed {
    pub section: Pattern,
    pub limit: NonZeroU32,
}

impl Default for Feed {
    fn default() -> Self {
        Self {
            section: Pattern::All,
            limit: NonZeroU32::new(DEFAULT_FEED_LIMIT).unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl Feed {
    /// Whether posts of `section` belong in the feed.
    pub fn includes(&self, section: &str) -> bool {
        self.section.matches(section)
    }
}

impl FeedConfig {
    pub fn normalize(self, diag: &mut ConfigDiagnostics) -> Feed {
        let default = Feed::default();
        let section = self
            .section
            .as_deref()
            .and_then(|s| parse_pattern(s, Self::FIELDS.section, diag))
            .unwrap_or(default.section);
        let limit = self
            .limit
            .and_then(|limit| positive(limit, Self::FIELDS.limit, diag))
            .unwrap_or(default.limit);

        Feed { section, limit }
    }
}

/// Parse a section selector, reporting failures against `field`.
pub(crate) fn parse_pattern(
    source: &str,
    field: crate::config::FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<Pattern> {
    match Pattern::parse(source) {
        Ok(pattern) => Some(pattern),
        Err(PatternError::Empty) => {
            diag.error_with_hint(
                field,
                Violation::Malformed,
                "pattern is empty",
                "use \"*\" for every section or remove the field",
            );
            None
        }
        Err(e) => {
            diag.error(field, Violation::Malformed, e.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let mut diag = ConfigDiagnostics::new();
        let out = FeedConfig::default().normalize(&mut diag);

        assert!(diag.is_empty());
        assert!(out.section.is_all());
        assert_eq!(out.limit.get(), DEFAULT_FEED_LIMIT);
        assert!(out.includes("anything"));
    }

    #[test]
    fn test_section_pattern() {
        let mut diag = ConfigDiagnostics::new();
        let out = FeedConfig {
            section: Some("note".into()),
            limit: Some(5),
        }
        .normalize(&mut diag);

        assert!(diag.is_empty());
        assert!(out.includes("note"));
        assert!(!out.includes("jotting"));
        assert_eq!(out.limit.get(), 5);
    }

    #[test]
    fn test_invalid_values() {
        let mut diag = ConfigDiagnostics::new();
        FeedConfig {
            section: Some(String::new()),
            limit: Some(-1),
        }
        .normalize(&mut diag);

        let kinds: Vec<_> = diag.errors().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![Violation::Malformed, Violation::NonPositive]);
        assert_eq!(diag.errors()[1].field.as_str(), "feed.limit");
    }
}
