//! Section selectors used by `feed.section` and `latest`.
//!
//! `"*"` (or any run of `*`) selects every section. Anything else is a name, optionally with `*`
//! wildcards (`"note*"`, `"*/2025"`), compiled once into an anchored regex.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("invalid pattern `{0}`: {1}")]
    Invalid(String, String),
}

/// Which content sections a setting applies to.
#[derive(Debug, Clone, Default)]
pub enum Pattern {
    /// Every section (`"*"`).
    #[default]
    All,
    /// Sections whose name matches `source`.
    Glob { source: String, regex: Regex },
}

impl Pattern {
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let source = source.trim();
        if source.is_empty() {
            return Err(PatternError::Empty);
        }
        if source.chars().all(|c| c == '*') {
            return Ok(Self::All);
        }

        let body = source
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = Regex::new(&format!("^{body}$"))
            .map_err(|e| PatternError::Invalid(source.to_string(), e.to_string()))?;

        Ok(Self::Glob {
            source: source.to_string(),
            regex,
        })
    }

    pub fn matches(&self, section: &str) -> bool {
        match self {
            Self::All => true,
            Self::Glob { regex, .. } => regex.is_match(section),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "*",
            Self::Glob { source, .. } => source,
        }
    }

    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

// Regex has no equality; the source text fully determines the pattern.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_is_all() {
        let pattern = Pattern::parse("*").unwrap();
        assert!(pattern.is_all());
        assert!(pattern.matches("note"));
        assert!(pattern.matches(""));
        assert_eq!(pattern, Pattern::All);

        let pattern = Pattern::parse("**").unwrap();
        assert!(pattern.is_all());
        assert_eq!(pattern.as_str(), "*");
    }

    #[test]
    fn test_literal_name() {
        let pattern = Pattern::parse("note").unwrap();
        assert!(pattern.matches("note"));
        assert!(!pattern.matches("notes"));
        assert!(!pattern.matches("jotting"));
    }

    #[test]
    fn test_wildcards() {
        let pattern = Pattern::parse("note*").unwrap();
        assert!(pattern.matches("note"));
        assert!(pattern.matches("notebook"));
        assert!(!pattern.matches("jotting"));

        let pattern = Pattern::parse("*/2025").unwrap();
        assert!(pattern.matches("note/2025"));
        assert!(!pattern.matches("note/2024"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let pattern = Pattern::parse("a.b").unwrap();
        assert!(pattern.matches("a.b"));
        assert!(!pattern.matches("axb"));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Pattern::parse("  ").unwrap_err(), PatternError::Empty);
    }

    #[test]
    fn test_serialize_as_source() {
        let json = serde_json::to_string(&Pattern::parse("note*").unwrap()).unwrap();
        assert_eq!(json, "\"note*\"");
        let json = serde_json::to_string(&Pattern::All).unwrap();
        assert_eq!(json, "\"*\"");
    }
}
