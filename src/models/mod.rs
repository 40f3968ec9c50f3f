//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the domain:
//! expenses, their identifiers and monetary amounts.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{Expense, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
