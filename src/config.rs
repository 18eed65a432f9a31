//! Report configuration

use crate::calendar::{WorkWeek, DEFAULT_DATE_FORMAT};
use crate::currency::Currency;
use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for building reports
///
/// ```toml
/// sunday_to_thursday = ["AED", "SAR"]
/// date_format = "%d %b %Y"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Currencies whose business week runs Sunday to Thursday
    #[serde(default = "default_sunday_to_thursday")]
    pub sunday_to_thursday: Vec<Currency>,
    /// chrono format of instruction and settlement dates in text input
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_sunday_to_thursday() -> Vec<Currency> {
    Currency::all()
        .into_iter()
        .filter(|c| c.default_work_week() == WorkWeek::SundayToThursday)
        .collect()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sunday_to_thursday: default_sunday_to_thursday(),
            date_format: default_date_format(),
        }
    }
}

impl ReportConfig {
    /// Business week a currency settles in
    pub fn work_week(&self, currency: Currency) -> WorkWeek {
        if self.sunday_to_thursday.contains(&currency) {
            WorkWeek::SundayToThursday
        } else {
            WorkWeek::MondayToFriday
        }
    }

    /// Parse from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ReportError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Load from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
