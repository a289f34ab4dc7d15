//! Expense CLI commands
//!
//! Turns one parsed command into one service call and renders the outcome.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::expense::{format_expense_details, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_amount, ExpenseId};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        #[arg(long, allow_hyphen_values = true)]
        description: String,
        /// Amount spent (e.g. "3.50")
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },
    /// Show one expense
    Get {
        /// Expense ID
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Change the description and amount of an expense
    Update {
        /// Expense ID
        #[arg(allow_hyphen_values = true)]
        id: String,
        /// New description
        #[arg(long, allow_hyphen_values = true)]
        description: String,
        /// New amount
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// List all expenses
    List,
    /// List expenses whose description matches exactly
    ListFilter {
        /// Description to match (case-sensitive)
        #[arg(allow_hyphen_values = true)]
        filter: String,
    },
}

impl ExpenseCommands {
    /// What the command is doing, as used in error messages
    pub fn action(&self) -> &'static str {
        match self {
            Self::Add { .. } => "adding expense",
            Self::Get { .. } => "getting expense",
            Self::Update { .. } => "updating expense",
            Self::Delete { .. } => "deleting expense",
            Self::List => "listing expenses",
            Self::ListFilter { .. } => "listing expenses by filter",
        }
    }
}

/// Handle an expense command, printing the result or the error
pub fn handle_expense_command(storage: &Storage, settings: &Settings, cmd: ExpenseCommands) {
    let action = cmd.action();
    match execute_expense_command(storage, settings, cmd) {
        Ok(output) => println!("{}", output),
        Err(e) => println!("Error {}: {}", action, e),
    }
}

/// Run an expense command and return the text to show the user
pub fn execute_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<String> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
        } => {
            let amount = parse_amount_arg(&amount)?;
            let expense = service.add(&description, amount)?;
            Ok(format!("Expense added successfully (ID: {})", expense.id))
        }

        ExpenseCommands::Get { id } => {
            let expense = service.get(parse_id_arg(&id)?)?;
            Ok(format_expense_details(&expense, &settings.date_format))
        }

        ExpenseCommands::Update {
            id,
            description,
            amount,
        } => {
            let id = parse_id_arg(&id)?;
            let amount = parse_amount_arg(&amount)?;
            let expense = service.update(id, &description, amount)?;
            Ok(format!("Expense updated successfully: {}", expense))
        }

        ExpenseCommands::Delete { id } => {
            let id = parse_id_arg(&id)?;
            service.delete(id)?;
            Ok(format!("Expense with ID {} deleted successfully", id))
        }

        ExpenseCommands::List => {
            let expenses = service.list()?;
            Ok(format!(
                "All Expenses:\n{}",
                format_expense_list(&expenses, &settings.date_format)
            ))
        }

        ExpenseCommands::ListFilter { filter } => {
            let expenses = service.list_by_filter(&filter)?;
            Ok(format!(
                "Filtered Expenses (Filter: {}):\n{}",
                filter,
                format_expense_list(&expenses, &settings.date_format)
            ))
        }
    }
}

fn parse_id_arg(input: &str) -> ExpenseResult<ExpenseId> {
    input
        .parse()
        .map_err(|_| ExpenseError::Validation(format!("invalid ID: '{}'", input)))
}

fn parse_amount_arg(input: &str) -> ExpenseResult<f64> {
    parse_amount(input).map_err(|e| ExpenseError::Validation(e.to_string()))
}
