//! Strongly-typed expense identifier
//!
//! Ids are small sequential integers handed out by the service layer. The
//! newtype keeps them from being mixed up with counts or indexes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::{ExpenseError, ExpenseResult};

/// Identifier of a stored expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Id given to the first expense of an empty collection
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Wrap a raw id
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one, if there is one
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    /// Next free id for a collection: one past the largest existing id
    pub fn next_after<I>(existing: I) -> ExpenseResult<Self>
    where
        I: IntoIterator<Item = ExpenseId>,
    {
        match existing.into_iter().max() {
            None => Ok(Self::FIRST),
            Some(max) => max.next().ok_or_else(|| {
                ExpenseError::Validation(format!("no expense ID available after {}", max))
            }),
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}
