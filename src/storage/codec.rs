//! Expense document codec
//!
//! The expenses file is a pretty-printed JSON array of expense objects:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "amount": 12.50,
//!     "description": "Coffee",
//!     "category": "Food",
//!     "date": "2024-03-09T08:15:00"
//!   }
//! ]
//! ```

use std::path::Path;

use crate::error::ExpenseResult;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Load every expense from `path`
///
/// A missing or blank file yields an empty list. Content that is present but
/// not an expense array is an [`ExpenseError::Decode`](crate::error::ExpenseError::Decode).
pub fn load_expenses(path: &Path) -> ExpenseResult<Vec<Expense>> {
    read_json(path)
}

/// Write the full collection to `path`, replacing what was there
pub fn save_expenses(expenses: &[Expense], path: &Path) -> ExpenseResult<()> {
    write_json_atomic(path, expenses)
}
