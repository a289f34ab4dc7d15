//! Expense repository for JSON storage
//!
//! The whole collection lives in one JSON array. Every call loads the file,
//! works on the loaded list, and rewrites the file if anything changed.
//! Nothing is cached between calls.

use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> ExpenseResult<Vec<Expense>> {
        read_json(&self.path)
    }

    fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &expenses)
    }

    /// Append a new expense
    pub fn add(&self, expense: Expense) -> ExpenseResult<()> {
        let mut expenses = self.load()?;

        if expenses.iter().any(|e| e.id == expense.id) {
            return Err(ExpenseError::duplicate_expense(expense.id));
        }

        expenses.push(expense);
        self.save(&expenses)
    }

    /// Get an expense by ID
    pub fn get_by_id(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        self.load()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id))
    }

    /// Replace description and amount of an expense, returning the updated record
    pub fn update(&self, id: ExpenseId, description: &str, amount: f64) -> ExpenseResult<Expense> {
        let mut expenses = self.load()?;

        let expense = expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;
        expense.apply_update(description, amount);
        let updated = expense.clone();

        self.save(&expenses)?;
        Ok(updated)
    }

    /// Delete an expense, returning the removed record
    pub fn delete_by_id(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let mut expenses = self.load()?;

        let index = expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;
        let removed = expenses.remove(index);

        self.save(&expenses)?;
        Ok(removed)
    }

    /// Get all expenses in stored order
    pub fn list_all(&self) -> ExpenseResult<Vec<Expense>> {
        self.load()
    }

    /// Get expenses whose description equals `filter` exactly
    pub fn list_by_filter(&self, filter: &str) -> ExpenseResult<Vec<Expense>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|e| e.matches_filter(filter))
            .collect())
    }

    /// Count expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        Ok(self.load()?.len())
    }
}
