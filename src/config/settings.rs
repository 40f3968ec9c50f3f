//! User settings for the expense tracker
//!
//! Manages display preferences and the location of the expenses file.

use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::storage::write_json_atomic;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Expenses file to use instead of `<data dir>/expenses.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%m/%d/%Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            data_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would break formatting later
    ///
    /// A date format must render a timestamp with no timezone; specifiers
    /// such as `%z` cannot and are refused here.
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if render(&NaiveDateTime::default(), &self.date_format).is_none() {
            return Err(ExpenseError::Config(format!(
                "Invalid date format: {}",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Render the date part of a timestamp
    pub fn format_date(&self, date: &NaiveDateTime) -> String {
        render(date, &self.date_format)
            .unwrap_or_else(|| date.format(&default_date_format()).to_string())
    }

    /// Render a timestamp as the configured date followed by the time
    pub fn format_date_time(&self, date: &NaiveDateTime) -> String {
        format!("{} {}", self.format_date(date), date.format("%H:%M:%S"))
    }

    /// The expenses file these settings point at
    pub fn expenses_file(&self, paths: &ExpensePaths) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| paths.expenses_file())
    }
}

fn render(date: &NaiveDateTime, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}
