//! `[i18n]` section configuration.

use crate::config::{ConfigDiagnostics, Violation};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Languages the site is published in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "i18n")]
pub struct I18nConfig {
    /// Locale tags, in display order (e.g. ["en", "zh-cn"]).
    #[config(default = "[\"en\"]", inline_doc)]
    pub locales: Vec<String>,

    /// Locale served without a path prefix, must be one of `locales`.
    #[serde(alias = "defaultLocale")]
    #[config(default = "en", inline_doc)]
    pub default_locale: String,
}

/// Validated locale list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct I18n {
    pub locales: Vec<String>,
    pub default_locale: String,
}

impl I18n {
    pub fn contains(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    pub fn is_default(&self, locale: &str) -> bool {
        self.default_locale == locale
    }

    /// Locales other than the default, in configured order.
    pub fn alternates(&self) -> impl Iterator<Item = &str> {
        self.locales
            .iter()
            .map(String::as_str)
            .filter(|l| *l != self.default_locale)
    }
}

impl I18nConfig {
    /// Validate the locale list.
    ///
    /// # Checks
    /// - `locales` is non-empty, every entry non-empty, trimmed and unique
    /// - `default_locale` is present, trimmed and listed in `locales`
    pub fn normalize(self, diag: &mut ConfigDiagnostics) -> I18n {
        let fields = Self::FIELDS;

        if self.locales.is_empty() {
            diag.error_with_hint(
                fields.locales.clone(),
                Violation::EmptyLocales,
                "at least one locale is required",
                format!("e.g.: locales = [\"{}\"]", fallback_hint(&self.default_locale)),
            );
        }

        let mut seen = BTreeSet::new();
        for (i, locale) in self.locales.iter().enumerate() {
            if !diag.require(fields.locales.index(i), locale) {
                continue;
            }
            if locale.trim() != locale.as_str() {
                diag.error_with_hint(
                    fields.locales.index(i),
                    Violation::Malformed,
                    format!("locale '{}' has surrounding whitespace", locale),
                    format!("use \"{}\"", locale.trim()),
                );
                continue;
            }
            if !seen.insert(locale.as_str()) {
                diag.error(
                    fields.locales.index(i),
                    Violation::DuplicateLocale,
                    format!("locale '{}' is listed more than once", locale),
                );
            }
        }

        let default_locale = self.default_locale.trim();
        let has_default = diag.require(fields.default_locale.clone(), default_locale);
        if has_default && default_locale != self.default_locale {
            diag.error_with_hint(
                fields.default_locale.clone(),
                Violation::Malformed,
                format!("default locale '{}' has surrounding whitespace", self.default_locale),
                format!("use \"{}\"", default_locale),
            );
        }
        // compared trimmed so stray whitespace is reported once, above
        if has_default
            && !self.locales.is_empty()
            && !self.locales.iter().any(|l| l.trim() == default_locale)
        {
            diag.error_with_hint(
                fields.default_locale,
                Violation::DefaultLocaleNotListed,
                format!(
                    "default locale '{}' is not one of {}",
                    self.default_locale, fields.locales
                ),
                format!("add it to the list or pick one of: {}", self.locales.join(", ")),
            );
        }

        I18n {
            locales: self.locales,
            default_locale: self.default_locale,
        }
    }
}

fn fallback_hint(default_locale: &str) -> &str {
    if default_locale.trim().is_empty() {
        "en"
    } else {
        default_locale
    }
}
