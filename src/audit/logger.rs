//! Expense change log
//!
//! One JSON object per line, appended after every successful mutation of
//! the expenses file. Never rewritten or truncated.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};

use super::entry::AuditEntry;

/// Appends to and reads back the expense change log
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Logger over the log file at `log_path`; the file is created on first write
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one change record
    pub fn log(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| ExpenseError::Io(format!("Cannot open change log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| ExpenseError::Io(format!("Cannot encode change record: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| ExpenseError::Io(format!("Cannot append to change log: {}", e)))?;

        file.flush()
            .map_err(|e| ExpenseError::Io(format!("Cannot flush change log: {}", e)))?;

        Ok(())
    }

    /// Every recorded change, oldest first. A missing log reads as empty.
    pub fn read_all(&self) -> ExpenseResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| ExpenseError::Io(format!("Cannot open change log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                ExpenseError::Io(format!("Cannot read change log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                ExpenseError::Io(format!(
                    "Unreadable change record at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// The last `count` changes, oldest first
    pub fn read_recent(&self, count: usize) -> ExpenseResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Number of recorded changes
    pub fn entry_count(&self) -> ExpenseResult<usize> {
        Ok(self.read_all()?.len())
    }

    /// Whether any change has been recorded yet
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Location of the log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
