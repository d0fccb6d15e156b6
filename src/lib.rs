//! Typed site configuration for a multilingual blog.
//!
//! ```ignore
//! use sitecfg::config::{AuthorConfig, I18nConfig, RawSiteConfig};
//!
//! let config = RawSiteConfig {
//!     title: "My Blog".into(),
//!     author: AuthorConfig {
//!         name: "Alice".into(),
//!         email: "alice@example.com".into(),
//!         link: "https://example.com".into(),
//!     },
//!     i18n: I18nConfig {
//!         locales: vec!["en".into(), "zh-cn".into()],
//!         default_locale: "en".into(),
//!     },
//!     ..Default::default()
//! }
//! .build()?;
//!
//! assert!(!config.monolocale());
//! ```

pub mod config;
pub mod logger;

pub use config::{ConfigError, RawSiteConfig, SiteConfig, site_config};
