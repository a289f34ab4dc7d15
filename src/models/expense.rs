//! Expense model
//!
//! The single record type of the tracker: what was spent, how much, and when.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;

/// A recorded monetary outlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation
    pub id: ExpenseId,

    /// Free-form description
    pub description: String,

    /// Amount spent, always positive
    pub amount: f64,

    /// When the expense was recorded
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense dated now
    pub fn new(id: ExpenseId, description: impl Into<String>, amount: f64) -> Self {
        Self::with_date(id, description, amount, Utc::now())
    }

    /// Create an expense with an explicit date
    pub fn with_date(
        id: ExpenseId,
        description: impl Into<String>,
        amount: f64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description: description.into().trim().to_string(),
            amount,
            date,
        }
    }

    /// Validate the user-editable fields of an expense
    pub fn validate_fields(description: &str, amount: f64) -> Result<(), ExpenseValidationError> {
        if description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount);
        }

        if amount <= 0.0 {
            return Err(ExpenseValidationError::NonPositiveAmount(amount));
        }

        Ok(())
    }

    /// Replace description and amount, leaving id and date untouched
    pub fn apply_update(&mut self, description: &str, amount: f64) {
        self.description = description.trim().to_string();
        self.amount = amount;
    }

    /// Check if this expense matches a filter (exact, case-sensitive)
    pub fn matches_filter(&self, filter: &str) -> bool {
        self.description == filter
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Date: {}, Description: {}, Amount: {:.2}",
            self.id,
            self.date.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.description,
            self.amount
        )
    }
}

/// Parse an amount typed on the command line
pub fn parse_amount(input: &str) -> Result<f64, ExpenseValidationError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ExpenseValidationError::InvalidAmount(input.to_string()))
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(f64),
    NonFiniteAmount,
    InvalidAmount(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "amount must be greater than zero (got {})", amount)
            }
            Self::NonFiniteAmount => write!(f, "amount must be a finite number"),
            Self::InvalidAmount(input) => write!(f, "invalid amount: '{}'", input),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
