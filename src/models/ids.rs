//! Strongly-typed expense identifier
//!
//! Ids are small sequential integers handed out by the repository. The newtype
//! keeps them from being confused with counts or indexes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a stored expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u32);

impl ExpenseId {
    /// The first id handed out to an empty collection
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// The largest representable id
    pub const MAX: ExpenseId = ExpenseId(u32::MAX);

    /// Wrap a raw id value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw id value
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// The id that follows this one, or `None` past [`ExpenseId::MAX`]
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ExpenseId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}
