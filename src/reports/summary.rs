//! Spending Summary
//!
//! Totals spending overall and per category.

use std::io::Write;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

/// Label used for expenses with an empty category
pub const UNCATEGORIZED: &str = "(uncategorized)";

/// Spending within one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name as first seen
    pub category: String,
    /// Total spent in the category
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Share of overall spending, 0-100
    pub percentage: f64,
}

/// Overall spending summary
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    /// Sum of all amounts
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Per-category totals, largest first
    pub categories: Vec<CategoryTotal>,
}

impl SpendingSummary {
    /// Build a summary from a set of expenses
    ///
    /// Categories are grouped case-insensitively; the first spelling seen
    /// names the group.
    pub fn build(expenses: &[Expense]) -> Self {
        let mut categories: Vec<CategoryTotal> = Vec::new();

        for expense in expenses {
            let key = expense.category.to_lowercase();
            match categories
                .iter_mut()
                .find(|c| c.category.to_lowercase() == key)
            {
                Some(entry) => {
                    entry.total += expense.amount;
                    entry.count += 1;
                }
                None => categories.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                    count: 1,
                    percentage: 0.0,
                }),
            }
        }

        let total: Money = expenses.iter().map(|e| &e.amount).sum();

        for entry in &mut categories {
            entry.percentage = percentage_of(entry.total, total);
        }

        // Stable sort keeps first-seen order among equal totals
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            total,
            count: expenses.len(),
            categories,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Total Spending: {}\n",
            self.total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!("Number of expenses: {}\n", self.count));

        if self.categories.is_empty() {
            return output;
        }

        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>12} {:>6} {:>7}\n",
            "Category", "Total", "Count", "%"
        ));
        output.push_str(&"-".repeat(52));
        output.push('\n');

        for entry in &self.categories {
            let name = if entry.category.is_empty() {
                UNCATEGORIZED
            } else {
                entry.category.as_str()
            };
            output.push_str(&format!(
                "{:<24} {:>12} {:>6} {:>6.1}%\n",
                name,
                entry.total.format_with_symbol(currency_symbol),
                entry.count,
                entry.percentage
            ));
        }

        output
    }

    /// Export the per-category totals to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let to_err = |e: csv::Error| ExpenseError::Export(e.to_string());

        csv.write_record(["Category", "Total", "Count", "Percentage"])
            .map_err(to_err)?;

        for entry in &self.categories {
            csv.write_record([
                entry.category.clone(),
                entry.total.to_plain_string(),
                entry.count.to_string(),
                format!("{:.1}", entry.percentage),
            ])
            .map_err(to_err)?;
        }

        csv.flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))
    }
}

fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    (part.amount() / whole.amount() * Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
}
