//! `[copyright]` section configuration.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// License notice shown in page footers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "copyright")]
pub struct CopyrightConfig {
    /// License identifier, free-form (e.g. "CC BY-NC-ND 4.0").
    #[serde(rename = "type")]
    #[config(name = "type", default = "CC BY-NC-SA 4.0", inline_doc)]
    pub kind: String,

    /// Year or range, kept as text (e.g. "2023-2025").
    #[config(inline_doc)]
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Copyright {
    #[serde(rename = "type")]
    pub kind: String,
    pub year: Option<String>,
}

impl CopyrightConfig {
    /// An untouched section means no notice. Once anything is set, `type` is required.
    pub fn normalize(self, diag: &mut ConfigDiagnostics) -> Option<Copyright> {
        if self.kind.trim().is_empty() && self.year.trim().is_empty() {
            return None;
        }
        diag.require(Self::FIELDS.kind, &self.kind);

        let year = (!self.year.trim().is_empty()).then_some(self.year);
        Some(Copyright {
            kind: self.kind,
            year,
        })
    }
}
