//! YAML Export functionality
//!
//! Exports the full expense collection to YAML for human-readable backup.
//! Amounts are written as quoted decimal strings; YAML numbers are floats and
//! would drop digits.

use std::io::Write;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::FullExport;
use crate::models::{Expense, ExpenseId, Money};
use crate::storage::ExpenseRepository;

#[derive(Debug, Serialize, Deserialize)]
struct YamlExport {
    schema_version: String,
    exported_at: DateTime<Utc>,
    app_version: String,
    expense_count: usize,
    total: Decimal,
    expenses: Vec<YamlExpense>,
}

#[derive(Debug, Serialize, Deserialize)]
struct YamlExpense {
    id: ExpenseId,
    amount: Decimal,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    date: NaiveDateTime,
}

impl From<FullExport> for YamlExport {
    fn from(export: FullExport) -> Self {
        Self {
            schema_version: export.schema_version,
            exported_at: export.exported_at,
            app_version: export.app_version,
            expense_count: export.expense_count,
            total: export.total.amount(),
            expenses: export
                .expenses
                .into_iter()
                .map(|e| YamlExpense {
                    id: e.id,
                    amount: e.amount.amount(),
                    description: e.description,
                    category: e.category,
                    date: e.date,
                })
                .collect(),
        }
    }
}

impl From<YamlExport> for FullExport {
    fn from(export: YamlExport) -> Self {
        Self {
            schema_version: export.schema_version,
            exported_at: export.exported_at,
            app_version: export.app_version,
            expense_count: export.expense_count,
            total: Money::new(export.total),
            expenses: export
                .expenses
                .into_iter()
                .map(|e| Expense {
                    id: e.id,
                    amount: Money::new(e.amount),
                    description: e.description,
                    category: e.category,
                    date: e.date,
                })
                .collect(),
        }
    }
}

/// Export every expense to YAML
pub fn export_full_yaml<W: Write>(repo: &dyn ExpenseRepository, writer: &mut W) -> ExpenseResult<()> {
    let export = FullExport::from_repository(repo);
    let to_err = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# Expense Tracker Export").map_err(to_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_err)?;
    writeln!(writer).map_err(to_err)?;

    serde_yaml::to_writer(writer, &YamlExport::from(export))
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> ExpenseResult<FullExport> {
    let export: YamlExport =
        serde_yaml::from_str(yaml_str).map_err(|e| ExpenseError::Decode(e.to_string()))?;
    let export = FullExport::from(export);

    export.validate().map_err(ExpenseError::Decode)?;

    Ok(export)
}
