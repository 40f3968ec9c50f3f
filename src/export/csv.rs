//! CSV Export functionality
//!
//! Exports expenses to a spreadsheet-friendly CSV file.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::ExpenseRepository;

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(repo: &dyn ExpenseRepository, writer: W) -> ExpenseResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    let to_err = |e: csv::Error| ExpenseError::Export(e.to_string());

    csv.write_record(["ID", "Date", "Category", "Description", "Amount"])
        .map_err(to_err)?;

    for expense in repo.get_all() {
        csv.write_record([
            expense.id.value().to_string(),
            expense.date.format("%Y-%m-%d %H:%M:%S").to_string(),
            expense.category,
            expense.description,
            expense.amount.to_plain_string(),
        ])
        .map_err(to_err)?;
    }

    csv.flush().map_err(|e| ExpenseError::Export(e.to_string()))
}
