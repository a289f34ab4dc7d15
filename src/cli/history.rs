//! History command
//!
//! Shows the most recent entries of the audit log.

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Default number of entries shown by `history`
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Handle the history command, printing the result or the error
pub fn handle_history_command(storage: &Storage, settings: &Settings, limit: usize) {
    match execute_history_command(storage, settings, limit) {
        Ok(output) => println!("{}", output),
        Err(e) => println!("Error reading history: {}", e),
    }
}

/// Render the last `limit` audit entries, oldest first
pub fn execute_history_command(
    storage: &Storage,
    settings: &Settings,
    limit: usize,
) -> ExpenseResult<String> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        return Ok(if storage.audit_enabled() {
            "No history recorded.".to_string()
        } else {
            "No history recorded (audit logging is disabled).".to_string()
        });
    }

    Ok(entries
        .iter()
        .map(|entry| entry.format_human_readable(&settings.date_format))
        .collect::<Vec<_>>()
        .join("\n"))
}
