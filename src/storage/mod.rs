//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and the audit log handle
//! used by the service layer.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;
use crate::models::Expense;

/// Main storage coordinator
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance with auditing enabled
    pub fn new(paths: ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_base_dir()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            paths,
        })
    }

    /// Turn audit logging off
    pub fn without_audit(mut self) -> Self {
        self.audit_enabled = false;
        self
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Whether mutations are written to the audit log
    pub fn audit_enabled(&self) -> bool {
        self.audit_enabled
    }

    /// Record a newly created expense
    pub fn log_create(&self, expense: &Expense) -> ExpenseResult<()> {
        self.log(AuditEntry::create(expense))
    }

    /// Record a change to an expense
    pub fn log_update(&self, before: &Expense, after: &Expense) -> ExpenseResult<()> {
        self.log(AuditEntry::update(before, after))
    }

    /// Record a deleted expense
    pub fn log_delete(&self, expense: &Expense) -> ExpenseResult<()> {
        self.log(AuditEntry::delete(expense))
    }

    fn log(&self, entry: AuditEntry) -> ExpenseResult<()> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log(&entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("home");
        let paths = ExpensePaths::with_base_dir(base.clone());
        let storage = Storage::new(paths).unwrap();

        assert!(base.exists());
        assert!(storage.audit_enabled());
        assert_eq!(storage.expenses.path(), base.join(".expense-tracker.json"));
    }

    #[test]
    fn test_log_helpers_write_entries() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let expense = Expense::new(ExpenseId::new(1), "coffee", 3.5);
        storage.log_create(&expense).unwrap();
        storage.log_delete(&expense).unwrap();

        assert_eq!(storage.audit().entry_count().unwrap(), 2);
    }

    #[test]
    fn test_without_audit_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap().without_audit();

        let expense = Expense::new(ExpenseId::new(1), "coffee", 3.5);
        storage.log_create(&expense).unwrap();

        assert!(!storage.audit().exists());
    }
}
