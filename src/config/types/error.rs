//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("unknown config fields: {}", .0.join(", "))]
    UnknownFields(Vec<String>),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

impl ConfigError {
    /// Diagnostics of a rejected configuration, if that is what this error is.
    pub fn diagnostics(&self) -> Option<&ConfigDiagnostics> {
        match self {
            Self::Invalid(diag) => Some(diag),
            _ => None,
        }
    }
}

// ============================================================================
// Violation
// ============================================================================

/// Which configuration invariant a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Required field absent or empty.
    Missing,
    /// `i18n.locales` has no entries.
    EmptyLocales,
    /// The same locale tag is listed twice.
    DuplicateLocale,
    /// `i18n.default_locale` is not one of `i18n.locales`.
    DefaultLocaleNotListed,
    /// Numeric field is zero or negative.
    NonPositive,
    /// Value present but not shaped like the field expects.
    Malformed,
}

impl Violation {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::EmptyLocales => "empty locales",
            Self::DuplicateLocale => "duplicate locale",
            Self::DefaultLocaleNotListed => "default locale not listed",
            Self::NonPositive => "non-positive",
            Self::Malformed => "malformed",
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "i18n.default_locale")
    pub field: FieldPath,
    pub kind: Violation,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, kind: Violation, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Every violation found while building one configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, kind: Violation, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, kind, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        kind: Violation,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, kind, message).with_hint(hint));
    }

    /// Report a required string field that is empty or whitespace.
    ///
    /// Returns `true` when the field is present.
    pub fn require(&mut self, field: FieldPath, value: &str) -> bool {
        if value.trim().is_empty() {
            self.error(field, Violation::Missing, "required field is missing or empty");
            false
        } else {
            true
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Whether any collected error is of the given kind.
    pub fn contains(&self, kind: Violation) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
