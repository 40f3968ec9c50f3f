//! Interactive menu
//!
//! A prompt-driven loop for users who prefer not to type subcommands.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::NewExpense;
use crate::reports::SpendingSummary;
use crate::storage::ExpenseRepository;

use super::input::parse_amount;

/// Run the menu until the user exits or input ends
pub fn run_menu<R: BufRead, W: Write>(
    repo: &mut dyn ExpenseRepository,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> ExpenseResult<()> {
    writeln!(output, "Welcome to the Expense Tracker!")?;

    loop {
        show_menu(output)?;

        let Some(choice) = read_line(input)? else {
            break;
        };

        match choice.trim() {
            "1" => {
                if !add_expense(repo, settings, input, output)? {
                    break;
                }
            }
            "2" => view_all(repo, settings, output)?,
            "3" => show_total(repo, settings, output)?,
            "4" => break,
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }

    // Each add is already persisted; exiting writes nothing
    writeln!(output, "Thank you for using the Expense Tracker!")?;
    Ok(())
}

fn show_menu<W: Write>(output: &mut W) -> ExpenseResult<()> {
    writeln!(output)?;
    writeln!(output, "--- Expense Tracker Menu ---")?;
    writeln!(output, "1. Add Expense")?;
    writeln!(output, "2. View All Expenses")?;
    writeln!(output, "3. Show Total Spending")?;
    writeln!(output, "4. Exit")?;
    write!(output, "Enter your choice (1-4): ")?;
    output.flush()?;
    Ok(())
}

/// Prompt for a new expense; returns false if input ended mid-way
fn add_expense<R: BufRead, W: Write>(
    repo: &mut dyn ExpenseRepository,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> ExpenseResult<bool> {
    writeln!(output)?;
    writeln!(output, "--- Add New Expense ---")?;

    let amount = loop {
        write!(output, "Enter amount: {}", settings.currency_symbol)?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        match parse_amount(&line) {
            Ok(amount) => break amount,
            Err(_) => writeln!(output, "Please enter a valid positive number.")?,
        }
    };

    write!(output, "Enter description: ")?;
    output.flush()?;
    let Some(description) = read_line(input)? else {
        return Ok(false);
    };

    write!(output, "Enter category: ")?;
    output.flush()?;
    let Some(category) = read_line(input)? else {
        return Ok(false);
    };

    let stored = repo.add(NewExpense::new(
        amount,
        description.trim(),
        category.trim(),
    ))?;

    writeln!(output)?;
    writeln!(
        output,
        "Expense added successfully! {} for {}",
        stored.amount.format_with_symbol(&settings.currency_symbol),
        stored.description
    )?;
    Ok(true)
}

fn view_all<W: Write>(
    repo: &dyn ExpenseRepository,
    settings: &Settings,
    output: &mut W,
) -> ExpenseResult<()> {
    writeln!(output)?;
    writeln!(output, "--- All Expenses ---")?;
    write!(output, "{}", format_expense_list(&repo.get_all(), settings))?;
    Ok(())
}

fn show_total<W: Write>(
    repo: &dyn ExpenseRepository,
    settings: &Settings,
    output: &mut W,
) -> ExpenseResult<()> {
    writeln!(output)?;
    let summary = SpendingSummary::build(&repo.get_all());
    write!(output, "{}", summary.format_terminal(&settings.currency_symbol))?;
    Ok(())
}

/// Read one line without its terminator; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> ExpenseResult<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| ExpenseError::Io(format!("Failed to read input: {}", e)))?;

    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
