//! Expense Tracker - command-line personal expense tracking
//!
//! This library provides the core functionality for the `expenses` binary:
//! recording expenses, querying them and summarising spending, with a single
//! JSON file as the system of record.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, ids, money)
//! - `storage`: Repository trait, JSON and in-memory stores, codec
//! - `reports`: Spending summaries
//! - `export`: CSV/JSON/YAML export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::models::{Money, NewExpense};
//! use expense_tracker::storage::{ExpenseRepository, JsonExpenseRepository};
//!
//! let mut repo = JsonExpenseRepository::open("expenses.json");
//! let stored = repo.add(NewExpense::new(Money::from_cents(1250), "Coffee", "Food"))?;
//! assert_eq!(repo.get_by_id(stored.id), Some(stored));
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
