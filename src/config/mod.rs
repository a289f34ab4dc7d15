//! Configuration module for the expense tracker
//!
//! This module provides:
//! - Per-user path resolution for the data, settings and audit files
//! - Optional user settings

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
