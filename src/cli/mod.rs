//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.
//! Errors never escape a handler: they are printed with a short prefix
//! naming what was being done.

pub mod expense;
pub mod history;

pub use expense::{execute_expense_command, handle_expense_command, ExpenseCommands};
pub use history::{execute_history_command, handle_history_command, DEFAULT_HISTORY_LIMIT};

/// Fixed usage text shown for missing, unknown or incomplete commands
pub const USAGE: &str = "\
Usage:
  expense add --description <text> --amount <number>
  expense get <ID>
  expense update <ID> --description <text> --amount <number>
  expense delete <ID>
  expense list
  expense list-filter <filter>
  expense history [--limit <n>]
  expense config
";

/// Print the usage text
pub fn print_usage() {
    print!("{}", USAGE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lists_every_command() {
        for command in [
            "add", "get", "update", "delete", "list", "list-filter", "history", "config",
        ] {
            assert!(
                USAGE.contains(&format!("expense {}", command)),
                "usage is missing '{}'",
                command
            );
        }
    }
}
