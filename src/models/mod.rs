//! Core data models for the expense tracker
//!
//! The domain is a single flat collection of expenses, each identified by a
//! sequential integer id.

pub mod expense;
pub mod ids;

pub use expense::{parse_amount, Expense, ExpenseValidationError};
pub use ids::ExpenseId;
