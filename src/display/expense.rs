//! Expense display formatting
//!
//! Renders expenses as tables and detail blocks for the terminal.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            id: expense.id.to_string(),
            date: settings.format_date(&expense.date),
            category: expense.category.clone(),
            amount: expense.amount.format_with_symbol(&settings.currency_symbol),
            description: truncate(&expense.description, 40),
        }
    }
}

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow::new(e, settings))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());

    format!("{}\n", table)
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!(
        "Date:        {}\n",
        settings.format_date_time(&expense.date)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));

    if expense.category.is_empty() {
        output.push_str("Category:    (uncategorized)\n");
    } else {
        output.push_str(&format!("Category:    {}\n", expense.category));
    }

    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;

    fn sample() -> Expense {
        Expense {
            id: ExpenseId::new(4),
            amount: Money::from_cents(1250),
            description: "Coffee".into(),
            category: "Food".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_opt(8, 15, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_empty_list() {
        let text = format_expense_list(&[], &Settings::default());
        assert_eq!(text, "No expenses recorded yet.\n");
    }

    #[test]
    fn test_list_contains_fields() {
        let text = format_expense_list(&[sample()], &Settings::default());
        assert!(text.contains("#4"));
        assert!(text.contains("03/09/2024"));
        assert!(text.contains("$12.50"));
        assert!(text.contains("Coffee"));
    }

    #[test]
    fn test_details() {
        let text = format_expense_details(&sample(), &Settings::default());
        assert!(text.contains("Expense:     #4"));
        assert!(text.contains("Date:        03/09/2024 08:15:00"));
        assert!(text.contains("Category:    Food"));
    }

    #[test]
    fn test_unrenderable_date_format_falls_back() {
        let settings = Settings {
            date_format: "%m/%d/%Y %z".into(),
            ..Settings::default()
        };
        assert!(format_expense_list(&[sample()], &settings).contains("03/09/2024"));
        assert!(format_expense_details(&sample(), &settings)
            .contains("Date:        03/09/2024 08:15:00"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very ...");
    }
}
