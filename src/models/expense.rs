//! Expense model
//!
//! An expense is a single recorded outflow: an amount, what it was for, a
//! free-text category and when it happened.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A stored expense
///
/// Only the repository assigns `id`; callers build a [`NewExpense`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, never reused
    pub id: ExpenseId,

    /// Amount spent (positive)
    pub amount: Money,

    /// Free-text description, may be empty
    #[serde(default)]
    pub description: String,

    /// Free-text category, may be empty; matched case-insensitively
    #[serde(default)]
    pub category: String,

    /// When the expense happened (local time)
    pub date: NaiveDateTime,
}

impl Expense {
    /// Build a stored expense from a draft and its assigned id
    pub(crate) fn from_draft(id: ExpenseId, draft: NewExpense) -> Self {
        Self {
            id,
            amount: draft.amount,
            description: draft.description,
            category: draft.category,
            date: draft.date,
        }
    }

    /// Calendar day of the expense, ignoring time of day
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Whether the category matches, ignoring case
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Whether the expense falls on a day within `start..=end`
    pub fn within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        let day = self.day();
        day >= start && day <= end
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {} - {}",
            self.date.format("%m/%d/%Y %H:%M:%S"),
            self.category,
            self.amount,
            self.description
        )
    }
}

/// An expense that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub amount: Money,
    pub description: String,
    pub category: String,
    pub date: NaiveDateTime,
}

impl NewExpense {
    /// Create a draft dated now
    pub fn new(amount: Money, description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
            category: category.into(),
            date: Local::now().naive_local(),
        }
    }

    /// Override the date of the draft
    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = date;
        self
    }
}
