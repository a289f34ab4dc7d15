//! Expense display formatting
//!
//! Formats expenses for terminal output in table and detail views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, ExpenseId};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: ExpenseId,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of expenses as a table followed by the total
pub fn format_expense_list(expenses: &[Expense], date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id,
        date: e.date.format(date_format).to_string(),
        description: e.description.clone(),
        amount: format_amount(e.amount),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(3), Alignment::right());

    let total: f64 = expenses.iter().map(|e| e.amount).sum();

    format!("{}\n\nTotal: {}", table, format_amount(total))
}

/// Format a single expense's details
pub fn format_expense_details(expense: &Expense, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense Details (ID: {}):\n", expense.id));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!("Amount: {}\n", format_amount(expense.amount)));
    output.push_str(&format!("Date: {}", expense.date.format(date_format)));

    output
}

/// Amounts are always shown with two decimals
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}
