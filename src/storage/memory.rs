//! Volatile expense repository
//!
//! Same contract as the JSON store with nothing written anywhere. Useful for
//! tests and dry runs.

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseId, Money, NewExpense};

use super::ledger::ExpenseLedger;
use super::repository::ExpenseRepository;

/// Repository that keeps expenses in memory only
#[derive(Debug, Default)]
pub struct InMemoryExpenseRepository {
    ledger: ExpenseLedger,
}

impl InMemoryExpenseRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `expenses`
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            ledger: ExpenseLedger::from_expenses(expenses),
        }
    }
}

impl ExpenseRepository for InMemoryExpenseRepository {
    fn get_all(&self) -> Vec<Expense> {
        self.ledger.as_slice().to_vec()
    }

    fn add(&mut self, expense: NewExpense) -> ExpenseResult<Expense> {
        self.ledger.insert(expense)
    }

    fn update(&mut self, expense: Expense) -> ExpenseResult<Option<Expense>> {
        Ok(self.ledger.update(&expense))
    }

    fn delete(&mut self, id: ExpenseId) -> ExpenseResult<bool> {
        Ok(self.ledger.remove(id).is_some())
    }

    fn get_by_id(&self, id: ExpenseId) -> Option<Expense> {
        self.ledger.get(id).cloned()
    }

    fn get_by_category(&self, category: &str) -> Vec<Expense> {
        self.ledger.by_category(category)
    }

    fn get_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
        self.ledger.by_date_range(start, end)
    }

    fn total_spending(&self) -> Money {
        self.ledger.total()
    }

    fn count(&self) -> usize {
        self.ledger.len()
    }

    fn save(&self) -> ExpenseResult<()> {
        Ok(())
    }
}
