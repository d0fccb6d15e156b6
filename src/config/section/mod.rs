//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`. A section has a raw
//! struct (what the site owner writes, every field defaulted) and a
//! `normalize` step producing the validated value.
//!
//! | Module       | TOML Section     | Purpose                         |
//! |--------------|------------------|---------------------------------|
//! | `author`     | `[author]`       | Author name, email, homepage    |
//! | `copyright`  | `[copyright]`    | License notice                  |
//! | `feed`       | `[feed]`         | Feed section selector and limit |
//! | `heatmap`    | `[heatmap]`      | Activity heatmap                |
//! | `i18n`       | `[i18n]`         | Locales and default locale      |
//! | `pagination` | `[pagination]`   | Page size per content kind      |

pub mod author;
pub mod copyright;
pub mod feed;
pub mod heatmap;
pub mod i18n;
pub mod pagination;

pub use author::{Author, AuthorConfig};
pub use copyright::{Copyright, CopyrightConfig};
pub use feed::{DEFAULT_FEED_LIMIT, Feed, FeedConfig};
pub use heatmap::{DEFAULT_HEATMAP_WEEKS, Heatmap, HeatmapConfig, HeatmapUnit};
pub use i18n::{I18n, I18nConfig};
pub use pagination::{DEFAULT_PAGINATION, Pagination};

use crate::config::{ConfigDiagnostics, FieldPath, Violation};
use std::num::NonZeroU32;

/// Check a user-supplied count, reporting zero, negative and oversized values.
pub(crate) fn positive(
    value: i64,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<NonZeroU32> {
    if value <= 0 {
        diag.error_with_hint(
            field,
            Violation::NonPositive,
            format!("must be a positive integer, got {}", value),
            "remove the field to use the default",
        );
        return None;
    }
    match u32::try_from(value).ok().and_then(NonZeroU32::new) {
        Some(n) => Some(n),
        None => {
            diag.error(
                field,
                Violation::Malformed,
                format!("{} is too large, the maximum is {}", value, u32::MAX),
            );
            None
        }
    }
}
