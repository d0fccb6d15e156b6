//! `[heatmap]` section configuration.

use super::positive;
use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

pub const DEFAULT_HEATMAP_WEEKS: u32 = 20;

/// Granularity of one heatmap cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatmapUnit {
    #[default]
    Day,
    Week,
}

impl fmt::Display for HeatmapUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Day => "day",
            Self::Week => "week",
        })
    }
}

/// Activity heatmap on the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "heatmap")]
pub struct HeatmapConfig {
    /// Cell granularity: day | week.
    #[config(default = "day", inline_doc)]
    pub unit: Option<HeatmapUnit>,

    /// Number of weeks shown.
    #[config(default = "20", inline_doc)]
    pub weeks: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub unit: HeatmapUnit,
    pub weeks: NonZeroU32,
}

impl Default for Heatmap {
    fn default() -> Self {
        Self {
            unit: HeatmapUnit::Day,
            weeks: NonZeroU32::new(DEFAULT_HEATMAP_WEEKS).unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl HeatmapConfig {
    pub fn normalize(self, diag: &mut ConfigDiagnostics) -> Heatmap {
        let default = Heatmap::default();
        let weeks = self
            .weeks
            .and_then(|weeks| positive(weeks, Self::FIELDS.weeks, diag))
            .unwrap_or(default.weeks);

        Heatmap {
            unit: self.unit.unwrap_or(default.unit),
            weeks,
        }
    }
}
