//! `[author]` section configuration.

use crate::config::{ConfigDiagnostics, Violation};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Site author, shown in page footers and feed entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "author")]
pub struct AuthorConfig {
    /// Display name.
    #[config(default = "Alice", inline_doc)]
    pub name: String,

    /// Contact address.
    #[config(default = "alice@example.com", inline_doc)]
    pub email: String,

    /// Homepage or profile URL.
    #[config(default = "https://example.com", inline_doc)]
    pub link: String,
}

/// Validated author metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub link: String,
}

impl AuthorConfig {
    /// Validate author fields.
    ///
    /// # Checks
    /// - `name`, `email` and `link` are present
    /// - `email` looks like `local@domain`
    /// - `link` is an http(s) URL with a host
    pub fn normalize(self, diag: &mut ConfigDiagnostics) -> Author {
        diag.require(Self::FIELDS.name, &self.name);

        if diag.require(Self::FIELDS.email, &self.email) && !is_email_like(&self.email) {
            diag.error_with_hint(
                Self::FIELDS.email,
                Violation::Malformed,
                format!("'{}' does not look like an email address", self.email),
                "use format like alice@example.com",
            );
        }

        if diag.require(Self::FIELDS.link, &self.link) {
            validate_link(&self.link, diag);
        }

        Author {
            name: self.name,
            email: self.email,
            link: self.link,
        }
    }
}

/// One `@` with something on both sides and no whitespace.
fn is_email_like(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

fn validate_link(link: &str, diag: &mut ConfigDiagnostics) {
    let field = AuthorConfig::FIELDS.link;
    match url::Url::parse(link) {
        Ok(parsed) => {
            // Must be http or https
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    Violation::Malformed,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            } else if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    Violation::Malformed,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                Violation::Malformed,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(name: &str, email: &str, link: &str) -> AuthorConfig {
        AuthorConfig {
            name: name.into(),
            email: email.into(),
            link: link.into(),
        }
    }

    #[test]
    fn test_valid_author_is_kept_verbatim() {
        let mut diag = ConfigDiagnostics::new();
        let out = author("KraHsu", "charles040318@gmail.mail", "https://blog.krahsu.top")
            .normalize(&mut diag);

        assert!(diag.is_empty());
        assert_eq!(out.name, "KraHsu");
        assert_eq!(out.email, "charles040318@gmail.mail");
        assert_eq!(out.link, "https://blog.krahsu.top");
    }

    #[test]
    fn test_missing_fields() {
        let mut diag = ConfigDiagnostics::new();
        author("", "", "").normalize(&mut diag);

        assert_eq!(diag.len(), 3);
        assert!(diag.errors().iter().all(|e| e.kind == Violation::Missing));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email_like("a@b"));
        assert!(is_email_like("first.last@example.co.uk"));
        assert!(!is_email_like("no-at-sign"));
        assert!(!is_email_like("@example.com"));
        assert!(!is_email_like("alice@"));
        assert!(!is_email_like("a@b@c"));
        assert!(!is_email_like("alice @example.com"));
    }

    #[test]
    fn test_link_shape() {
        for bad in ["blog.krahsu.top", "ftp://example.com", "mailto:a@b.c"] {
            let mut diag = ConfigDiagnostics::new();
            author("a", "a@b.c", bad).normalize(&mut diag);
            assert_eq!(diag.len(), 1, "{bad} should be rejected");
            assert_eq!(diag.errors()[0].kind, Violation::Malformed);
            assert_eq!(diag.errors()[0].field.as_str(), "author.link");
        }
    }
}
