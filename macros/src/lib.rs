//! Proc macros for sitecfg.
//!
//! # Config derive macro
//!
//! Generates field path accessors for diagnostics and a commented TOML
//! template for `sitecfg init`.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "author")]
//! /// Author shown in the footer and in feeds.
//! pub struct AuthorConfig {
//!     /// Display name.
//!     #[config(inline_doc)]
//!     pub name: String,
//!
//!     /// Homepage of the author.
//!     #[config(default = "https://example.com")]
//!     pub link: String,
//!
//!     /// Not part of the file format.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - AuthorConfig::FIELDS.name -> FieldPath("author.name")
//! // - AuthorConfig::template() -> TOML string with comments
//! // - AuthorConfig::template_with_header() -> with [author] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (`""` for the root table)
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template
//! - `#[config(hidden)]` - Keep in FIELDS, hide from template output
//! - `#[config(sub)]` - Nested section, rendered with its own header
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value shown in template
//! - `#[config(inline_doc)]` / `#[config(inline_doc = "x")]` - Trailing comment
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `HeatmapConfig` → `heatmap`
//! - `SiteInfoConfig` → `site_info`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
