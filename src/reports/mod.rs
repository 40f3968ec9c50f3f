//! Reports module
//!
//! Aggregate views over the stored expenses.

pub mod summary;

pub use summary::{CategoryTotal, SpendingSummary, UNCATEGORIZED};
