//! Expense service
//!
//! Validates input, assigns ids and creation dates, and records every
//! mutation in the audit log.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense dated now
    pub fn add(&self, description: &str, amount: f64) -> ExpenseResult<Expense> {
        validate(description, amount)?;

        let existing = self.storage.expenses.list_all()?;
        let id = ExpenseId::next_after(existing.iter().map(|e| e.id))?;
        let expense = Expense::new(id, description, amount);

        self.storage.expenses.add(expense.clone())?;
        self.storage.log_create(&expense)?;

        Ok(expense)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        self.storage.expenses.get_by_id(id)
    }

    /// Change the description and amount of an expense
    pub fn update(&self, id: ExpenseId, description: &str, amount: f64) -> ExpenseResult<Expense> {
        validate(description, amount)?;

        let before = self.storage.expenses.get_by_id(id)?;
        let updated = self.storage.expenses.update(id, description, amount)?;
        self.storage.log_update(&before, &updated)?;

        Ok(updated)
    }

    /// Delete an expense, returning what was removed
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let removed = self.storage.expenses.delete_by_id(id)?;
        self.storage.log_delete(&removed)?;

        Ok(removed)
    }

    /// List all expenses in stored order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.list_all()
    }

    /// List expenses whose description equals `filter` exactly
    pub fn list_by_filter(&self, filter: &str) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.list_by_filter(filter)
    }
}

fn validate(description: &str, amount: f64) -> ExpenseResult<()> {
    Expense::validate_fields(description, amount)
        .map_err(|e| ExpenseError::Validation(e.to_string()))
}
