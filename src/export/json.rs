//! JSON Export functionality
//!
//! Exports the full expense collection with schema versioning.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::storage::ExpenseRepository;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of exported expenses
    pub expense_count: usize,

    /// Sum of all exported amounts
    pub total: Money,

    /// All expenses
    pub expenses: Vec<Expense>,
}

impl FullExport {
    /// Create an export from a repository snapshot
    pub fn from_repository(repo: &dyn ExpenseRepository) -> Self {
        let expenses = repo.get_all();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: expenses.len(),
            total: repo.total_spending(),
            expenses,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.expense_count != self.expenses.len() {
            return Err(format!(
                "Expense count mismatch: header says {}, found {}",
                self.expense_count,
                self.expenses.len()
            ));
        }

        let mut seen = HashSet::new();
        for expense in &self.expenses {
            if !seen.insert(expense.id) {
                return Err(format!("Duplicate expense id {}", expense.id));
            }
        }

        Ok(())
    }
}

/// Export every expense to JSON
pub fn export_full_json<W: Write>(
    repo: &dyn ExpenseRepository,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = FullExport::from_repository(repo);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Read back a JSON export (for verification)
pub fn import_from_json(json_str: &str) -> ExpenseResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| ExpenseError::Decode(e.to_string()))?;

    export.validate().map_err(ExpenseError::Decode)?;

    Ok(export)
}
