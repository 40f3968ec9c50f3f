//! Storage layer for the expense tracker
//!
//! Provides the repository contract, its JSON-file and in-memory
//! implementations, and the codec with atomic writes underneath.

pub mod codec;
pub mod file_io;
pub mod json;
pub mod ledger;
pub mod memory;
pub mod repository;

pub use codec::{load_expenses, save_expenses};
pub use file_io::{read_json, write_json_atomic};
pub use json::JsonExpenseRepository;
pub use ledger::ExpenseLedger;
pub use memory::InMemoryExpenseRepository;
pub use repository::ExpenseRepository;
