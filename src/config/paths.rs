//! Path management for the expense tracker
//!
//! All files live directly in the user's home directory.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_HOME` environment variable (if set)
//! 2. The home directory reported by the platform

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::ExpenseError;

/// Environment variable that overrides the home directory
pub const HOME_ENV_VAR: &str = "EXPENSE_TRACKER_HOME";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Directory holding the data, settings and audit files
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match std::env::var_os(HOME_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_home_dir()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the expense collection
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join(".expense-tracker.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(".expense-tracker.config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join(".expense-tracker.audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_base_dir(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_home_dir() -> Result<PathBuf, ExpenseError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| ExpenseError::Config("Unable to get the home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join(".expense-tracker.json")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(HOME_ENV_VAR, temp_dir.path());
        let paths = ExpensePaths::new().unwrap();
        env::remove_var(HOME_ENV_VAR);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_base_dir().unwrap();
        assert!(paths.base_dir().exists());
    }

    #[test]
    fn test_file_paths_share_base_dir() {
        let paths = ExpensePaths::with_base_dir(PathBuf::from("/home/someone"));

        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/home/someone/.expense-tracker.config.json")
        );
        assert_eq!(
            paths.audit_log(),
            PathBuf::from("/home/someone/.expense-tracker.audit.log")
        );
    }
}
