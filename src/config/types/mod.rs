//! Configuration utility types.
//!
//! | Module    | Purpose                                      |
//! |-----------|----------------------------------------------|
//! | `error`   | Configuration error and diagnostics          |
//! | `field`   | Typed config field paths                     |
//! | `pattern` | `*`-wildcard section selectors               |

mod error;
mod field;
mod pattern;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, Violation};
pub use field::FieldPath;
pub use pattern::{Pattern, PatternError};
