//! In-memory expense collection
//!
//! The ledger owns the ordered list of expenses and the id counter. Both
//! repository implementations delegate to it so id assignment and queries
//! behave identically regardless of the backing store.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money, NewExpense};

/// Ordered expense collection with monotonic id assignment
#[derive(Debug, Clone)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
    // None once ExpenseId::MAX has been handed out
    next_id: Option<ExpenseId>,
}

impl Default for ExpenseLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseLedger {
    /// Create an empty ledger; the first id handed out is 1
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: Some(ExpenseId::FIRST),
        }
    }

    /// Build a ledger from previously stored expenses
    ///
    /// The next id is one past the largest id present. A collection that
    /// already holds [`ExpenseId::MAX`] loads fine but refuses further inserts.
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let next_id = match expenses.iter().map(|e| e.id).max() {
            Some(max) => max.next(),
            None => Some(ExpenseId::FIRST),
        };

        Self { expenses, next_id }
    }

    /// The id the next insert will receive, `None` when ids are exhausted
    pub fn next_id(&self) -> Option<ExpenseId> {
        self.next_id
    }

    /// Borrow the stored expenses in insertion order
    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    /// Assign an id to a draft and append it
    ///
    /// Fails without touching the collection once every id has been used.
    pub fn insert(&mut self, draft: NewExpense) -> ExpenseResult<Expense> {
        let id = self.next_id.ok_or_else(|| {
            ExpenseError::Validation(format!("No expense ids left after {}", ExpenseId::MAX))
        })?;
        self.next_id = id.next();

        let expense = Expense::from_draft(id, draft);
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Overwrite the mutable fields of the expense with the same id
    ///
    /// Returns `None` when no such expense exists.
    pub fn update(&mut self, changes: &Expense) -> Option<Expense> {
        let existing = self.expenses.iter_mut().find(|e| e.id == changes.id)?;

        existing.amount = changes.amount;
        existing.description = changes.description.clone();
        existing.category = changes.category.clone();
        existing.date = changes.date;

        Some(existing.clone())
    }

    /// Remove the expense with `id`, returning it if present
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(index))
    }

    /// Look up an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Expenses whose category matches, ignoring case
    pub fn by_category(&self, category: &str) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| e.in_category(category))
            .cloned()
            .collect()
    }

    /// Expenses dated on a calendar day within `start..=end`
    pub fn by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| e.within(start, end))
            .cloned()
            .collect()
    }

    /// Sum of all amounts
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| &e.amount).sum()
    }

    /// Number of stored expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the ledger holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
