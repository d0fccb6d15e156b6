//! `[pagination]` section: page size per content kind.
//!
//! ```toml
//! [pagination]
//! note = 15
//! jotting = 24
//! ```
//!
//! Listed kinds override the defaults, new kinds are added next to them.

use super::positive;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::Serialize;
use std::collections::BTreeMap;
use std::num::NonZeroU32;

/// Page sizes used when `[pagination]` leaves a kind out.
pub const DEFAULT_PAGINATION: &[(&str, u32)] = &[("jotting", 24), ("note", 15)];

/// Page size per content kind, ordered by kind name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Pagination(BTreeMap<String, NonZeroU32>);

impl Default for Pagination {
    fn default() -> Self {
        let sizes = DEFAULT_PAGINATION
            .iter()
            .filter_map(|&(kind, size)| Some((kind.to_string(), NonZeroU32::new(size)?)))
            .collect();
        Self(sizes)
    }
}

impl Pagination {
    /// Merge user-supplied sizes over the defaults.
    pub fn normalize(
        raw: &BTreeMap<String, i64>,
        field: &FieldPath,
        diag: &mut ConfigDiagnostics,
    ) -> Self {
        let mut pagination = Self::default();
        for (kind, &size) in raw {
            if !diag.require(field.key(kind), kind) {
                continue;
            }
            if let Some(size) = positive(size, field.key(kind), diag) {
                pagination.0.insert(kind.clone(), size);
            }
        }
        pagination
    }

    pub fn page_size(&self, kind: &str) -> Option<NonZeroU32> {
        self.0.get(kind).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, NonZeroU32)> {
        self.0.iter().map(|(kind, size)| (kind.as_str(), *size))
    }
}

/// `[pagination]` block for `sitecfg init`.
pub fn template_with_header() -> String {
    let mut out = String::from("# Items per page, by content kind.\n[pagination]\n");
    for (kind, size) in DEFAULT_PAGINATION {
        out.push_str(&format!("{kind} = {size}\n"));
    }
    out
}
