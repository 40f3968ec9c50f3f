//! Expense repository contract
//!
//! The CLI talks to storage only through this trait, so the JSON-backed store
//! can be swapped for the in-memory one (or anything else) without touching
//! callers.

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseId, Money, NewExpense};

/// Authoritative store of expenses
///
/// Mutating operations persist before returning. When persisting fails the
/// change stays applied in memory and the error is returned: the change was
/// accepted but is not yet durable.
pub trait ExpenseRepository {
    /// Snapshot of every expense in insertion order
    fn get_all(&self) -> Vec<Expense>;

    /// Store a new expense under a freshly assigned id
    fn add(&mut self, expense: NewExpense) -> ExpenseResult<Expense>;

    /// Overwrite amount, description, category and date of `expense.id`
    ///
    /// Returns `Ok(None)` without persisting when the id is unknown.
    fn update(&mut self, expense: Expense) -> ExpenseResult<Option<Expense>>;

    /// Remove an expense; `Ok(false)` when the id is unknown
    fn delete(&mut self, id: ExpenseId) -> ExpenseResult<bool>;

    /// Look up an expense by id
    fn get_by_id(&self, id: ExpenseId) -> Option<Expense>;

    /// Expenses in `category`, compared case-insensitively
    fn get_by_category(&self, category: &str) -> Vec<Expense>;

    /// Expenses dated between `start` and `end` inclusive, by calendar day
    fn get_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Expense>;

    /// Sum of all amounts, zero when empty
    fn total_spending(&self) -> Money;

    /// Number of stored expenses
    fn count(&self) -> usize;

    /// Force the current state to durable storage
    fn save(&self) -> ExpenseResult<()>;
}
