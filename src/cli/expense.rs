//! Expense CLI commands
//!
//! Implements the add/list/show/update/delete/total commands on top of an
//! [`ExpenseRepository`].

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money, NewExpense};
use crate::reports::SpendingSummary;
use crate::storage::ExpenseRepository;

use super::input::{parse_amount, parse_date, parse_date_time};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g. 12.50)
        amount: String,
        /// What the money was spent on
        #[arg(default_value = "")]
        description: String,
        /// Category (free text)
        #[arg(short, long, default_value = "")]
        category: String,
        /// Date (YYYY-MM-DD or "YYYY-MM-DD HH:MM"); defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List expenses
    #[command(alias = "ls")]
    List {
        /// Only show this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Show one expense
    Show {
        /// Expense ID (e.g. 3 or #3)
        id: ExpenseId,
    },
    /// Change an existing expense
    #[command(alias = "edit")]
    Update {
        /// Expense ID
        id: ExpenseId,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: ExpenseId,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show total spending with a per-category breakdown
    Total {
        /// Only include this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    repo: &mut dyn ExpenseRepository,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let mut draft = NewExpense::new(parse_amount(&amount)?, description, category);
            if let Some(date) = date {
                draft = draft.with_date(parse_date_time(&date)?);
            }

            let stored = repo.add(draft)?;
            println!(
                "Added expense {}: {} for {}",
                stored.id,
                stored.amount.format_with_symbol(&settings.currency_symbol),
                stored.description
            );
        }

        ExpenseCommands::List { category, from, to } => {
            let expenses = filtered(&*repo, category.as_deref(), from, to)?;
            print!("{}", format_expense_list(&expenses, settings));
        }

        ExpenseCommands::Show { id } => {
            let expense = repo
                .get_by_id(id)
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::Update {
            id,
            amount,
            description,
            category,
            date,
        } => {
            let existing = repo
                .get_by_id(id)
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

            let changes = apply_changes(existing, amount, description, category, date)?;
            let updated = repo
                .update(changes)?
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

            println!("Updated expense {}", updated.id);
            print!("{}", format_expense_details(&updated, settings));
        }

        ExpenseCommands::Delete { id, force } => {
            let expense = repo
                .get_by_id(id)
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

            if !force {
                println!("About to delete expense: {}", expense);
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            if repo.delete(id)? {
                println!("Deleted expense {}", id);
            }
        }

        ExpenseCommands::Total { category } => {
            let expenses = match category {
                Some(category) => repo.get_by_category(&category),
                None => repo.get_all(),
            };

            if expenses.is_empty() {
                println!(
                    "No expenses recorded yet. Total: {}",
                    Money::zero().format_with_symbol(&settings.currency_symbol)
                );
                return Ok(());
            }

            print!(
                "{}",
                SpendingSummary::build(&expenses).format_terminal(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}

/// Apply the optional field changes from the command line to an expense
fn apply_changes(
    mut expense: Expense,
    amount: Option<String>,
    description: Option<String>,
    category: Option<String>,
    date: Option<String>,
) -> ExpenseResult<Expense> {
    if let Some(amount) = amount {
        expense.amount = parse_amount(&amount)?;
    }
    if let Some(description) = description {
        expense.description = description;
    }
    if let Some(category) = category {
        expense.category = category;
    }
    if let Some(date) = date {
        expense.date = parse_date_time(&date)?;
    }
    Ok(expense)
}

/// Select expenses by optional category and inclusive date bounds
fn filtered(
    repo: &dyn ExpenseRepository,
    category: Option<&str>,
    from: Option<String>,
    to: Option<String>,
) -> ExpenseResult<Vec<Expense>> {
    let from = from.as_deref().map(parse_date).transpose()?;
    let to = to.as_deref().map(parse_date).transpose()?;

    let mut expenses = if from.is_some() || to.is_some() {
        repo.get_by_date_range(
            from.unwrap_or(NaiveDate::MIN),
            to.unwrap_or(NaiveDate::MAX),
        )
    } else {
        repo.get_all()
    };

    if let Some(category) = category {
        expenses.retain(|e| e.in_category(category));
    }

    Ok(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryExpenseRepository;
    use rust_decimal_macros::dec;

    fn seeded() -> InMemoryExpenseRepository {
        let mut repo = InMemoryExpenseRepository::new();
        for (amount, category, date) in [
            ("12.50", "Food", "2024-01-10 08:00"),
            ("40.00", "Transport", "2024-01-11 18:30"),
            ("3.20", "food", "2024-01-12"),
        ] {
            handle_expense_command(
                &mut repo,
                &Settings::default(),
                ExpenseCommands::Add {
                    amount: amount.into(),
                    description: "x".into(),
                    category: category.into(),
                    date: Some(date.into()),
                },
            )
            .unwrap();
        }
        repo
    }

    #[test]
    fn test_add_rejects_non_positive_amount() {
        let mut repo = InMemoryExpenseRepository::new();
        let err = handle_expense_command(
            &mut repo,
            &Settings::default(),
            ExpenseCommands::Add {
                amount: "0".into(),
                description: String::new(),
                category: String::new(),
                date: None,
            },
        )
        .unwrap_err();

        assert!(matches!(err, ExpenseError::Validation(_)));
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_filtered_by_range_and_category() {
        let repo = seeded();

        let all = filtered(&repo, None, None, None).unwrap();
        assert_eq!(all.len(), 3);

        let food = filtered(&repo, Some("FOOD"), None, None).unwrap();
        assert_eq!(food.len(), 2);

        let from_11 = filtered(&repo, None, Some("2024-01-11".into()), None).unwrap();
        assert_eq!(from_11.len(), 2);

        let food_until_11 =
            filtered(&repo, Some("food"), None, Some("2024-01-11".into())).unwrap();
        assert_eq!(food_until_11.len(), 1);

        assert!(filtered(&repo, None, Some("bad".into()), None).is_err());
    }

    #[test]
    fn test_update_changes_only_given_fields() {
        let mut repo = seeded();
        handle_expense_command(
            &mut repo,
            &Settings::default(),
            ExpenseCommands::Update {
                id: ExpenseId::new(2),
                amount: Some("45.10".into()),
                description: None,
                category: None,
                date: None,
            },
        )
        .unwrap();

        let updated = repo.get_by_id(ExpenseId::new(2)).unwrap();
        assert_eq!(updated.amount, Money::new(dec!(45.10)));
        assert_eq!(updated.category, "Transport");
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut repo = seeded();
        let err = handle_expense_command(
            &mut repo,
            &Settings::default(),
            ExpenseCommands::Update {
                id: ExpenseId::new(99),
                amount: Some("1".into()),
                description: None,
                category: None,
                date: None,
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_requires_force() {
        let mut repo = seeded();
        let settings = Settings::default();

        handle_expense_command(
            &mut repo,
            &settings,
            ExpenseCommands::Delete {
                id: ExpenseId::new(1),
                force: false,
            },
        )
        .unwrap();
        assert_eq!(repo.count(), 3);

        handle_expense_command(
            &mut repo,
            &settings,
            ExpenseCommands::Delete {
                id: ExpenseId::new(1),
                force: true,
            },
        )
        .unwrap();
        assert_eq!(repo.count(), 2);
        assert_eq!(repo.total_spending().amount(), dec!(43.20));
    }
}
