//! General application configuration.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Earliest and latest anchor years accepted.
const ANCHOR_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1990..=2200;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// First forecast year. Historical years are the three before it.
    /// Unset means the current calendar year.
    #[serde(default)]
    pub anchor_year: Option<i32>,
}

impl GeneralConfig {
    /// Configured anchor year, or the current local year.
    #[must_use]
    pub fn resolved_anchor_year(&self) -> i32 {
        self.anchor_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match self.anchor_year {
            Some(year) if !ANCHOR_YEAR_RANGE.contains(&year) => Err(ConfigError::InvalidValue {
                field: "general.anchor_year".into(),
                reason: format!(
                    "{year} is outside {}..={}",
                    ANCHOR_YEAR_RANGE.start(),
                    ANCHOR_YEAR_RANGE.end()
                ),
            }),
            _ => Ok(()),
        }
    }
}
