//! Audit logging for the expense tracker
//!
//! Records every create, update and delete with before/after snapshots in an
//! append-only JSON-lines file.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::create(&expense))?;
//! logger.log(&AuditEntry::update(&before, &after))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
