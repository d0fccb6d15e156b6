//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Static paths come from `#[derive(Config)]`; paths into map sections
/// (e.g. `pagination.note`) are built at runtime with [`FieldPath::key`].
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "feed")]
/// pub struct FeedConfig {
///     pub limit: Option<i64>,
/// }
///
/// diag.error(FeedConfig::FIELDS.limit, Violation::NonPositive, "must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path of an entry inside a map section, e.g. `pagination` + `note`.
    pub fn key(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}.{}", self.0, key)))
    }

    /// Path of an element inside an array field, e.g. `i18n.locales[1]`.
    pub fn index(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{}]", self.0, index)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
