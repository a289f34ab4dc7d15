use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_TRACKER_HOME", home.path());
    cmd
}

#[test]
fn no_arguments_prints_usage() {
    let home = TempDir::new().unwrap();

    expense(&home)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage:"));
}

#[test]
fn unknown_command_prints_usage() {
    let home = TempDir::new().unwrap();

    expense(&home)
        .arg("frobnicate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: frobnicate"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn missing_arguments_print_usage_without_touching_storage() {
    let home = TempDir::new().unwrap();

    expense(&home)
        .args(["add", "--description", "coffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));

    assert!(!home.path().join(".expense-tracker.json").exists());
}

#[test]
fn add_then_get() {
    let home = TempDir::new().unwrap();

    expense(&home)
        .args(["add", "--description", "coffee", "--amount", "3.50"])
        .assert()
        .success()
        .stdout("Expense added successfully (ID: 1)\n");

    expense(&home)
        .args(["get", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Details (ID: 1):"))
        .stdout(predicate::str::contains("Description: coffee"))
        .stdout(predicate::str::contains("Amount: 3.50"));
}

#[test]
fn delete_then_get_reports_not_found() {
    let home = TempDir::new().unwrap();

    expense(&home)
        .args(["add", "--description", "coffee", "--amount", "3.50"])
        .assert()
        .success();

    expense(&home)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout("Expense with ID 1 deleted successfully\n");

    expense(&home)
        .args(["get", "1"])
        .assert()
        .success()
        .stdout("Error getting expense: Expense not found: 1\n");
}

#[test]
fn list_filter_matches_exact_description() {
    let home = TempDir::new().unwrap();

    expense(&home)
        .args(["add", "--description", "coffee", "--amount", "3.50"])
        .assert()
        .success();
    expense(&home)
        .args(["add", "--amount", "2", "--description", "tea"])
        .assert()
        .success()
        .stdout("Expense added successfully (ID: 2)\n");

    expense(&home)
        .args(["list-filter", "coffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filtered Expenses (Filter: coffee):"))
        .stdout(predicate::str::contains("coffee"))
        .stdout(predicate::str::contains("tea").not());

    expense(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("All Expenses:"))
        .stdout(predicate::str::contains("coffee"))
        .stdout(predicate::str::contains("tea"))
        .stdout(predicate::str::contains("Total: 5.50"));
}

#[test]
fn validation_errors_are_printed_and_exit_normally() {
    let home = TempDir::new().unwrap();

    expense(&home)
        .args(["add", "--description", "coffee", "--amount", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error adding expense: Validation error:"));

    expense(&home)
        .args(["add", "--description", "", "--amount", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("description cannot be empty"));

    expense(&home)
        .args(["update", "x", "--description", "tea", "--amount", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error updating expense: Validation error: invalid ID"));

    assert!(!home.path().join(".expense-tracker.json").exists());
}

#[test]
fn update_changes_description_and_amount() {
    let home = TempDir::new().unwrap();

    expense(&home)
        .args(["add", "--description", "coffee", "--amount", "3.50"])
        .assert()
        .success();

    expense(&home)
        .args(["update", "1", "--description", "espresso", "--amount", "4"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Expense updated successfully: ID: 1"));

    expense(&home)
        .args(["get", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Description: espresso"))
        .stdout(predicate::str::contains("Amount: 4.00"));
}

#[test]
fn malformed_data_file_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join(".expense-tracker.json"), "not json").unwrap();

    expense(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error listing expenses: I/O error:"));
}

#[test]
fn history_shows_audited_changes() {
    let home = TempDir::new().unwrap();

    expense(&home)
        .args(["add", "--description", "coffee", "--amount", "3.50"])
        .assert()
        .success();
    expense(&home).args(["delete", "1"]).assert().success();

    expense(&home)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Expense 1 (coffee)"))
        .stdout(predicate::str::contains("DELETE Expense 1 (coffee)"));
}

#[test]
fn audit_can_be_disabled_in_settings() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join(".expense-tracker.config.json"),
        r#"{"audit_log": false}"#,
    )
    .unwrap();

    expense(&home)
        .args(["add", "--description", "coffee", "--amount", "3.50"])
        .assert()
        .success();

    assert!(!home.path().join(".expense-tracker.audit.log").exists());
}

#[test]
fn config_shows_paths() {
    let home = TempDir::new().unwrap();

    expense(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(".expense-tracker.json"))
        .stdout(predicate::str::contains("Stored expenses: 0"))
        .stdout(predicate::str::contains("Date format: %Y-%m-%d %H:%M"));

    expense(&home)
        .args(["add", "--description", "coffee", "--amount", "3.50"])
        .assert()
        .success();

    expense(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored expenses: 1"));
}

#[test]
fn hyphenated_positionals_are_not_flags() {
    let home = TempDir::new().unwrap();

    expense(&home)
        .args(["add", "--description", "-refund", "--amount", "3"])
        .assert()
        .success()
        .stdout("Expense added successfully (ID: 1)\n");

    expense(&home)
        .args(["list-filter", "-refund"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Filtered Expenses (Filter: -refund):"))
        .stdout(predicate::str::contains("Usage:").not());

    expense(&home)
        .args(["get", "-1"])
        .assert()
        .success()
        .stdout("Error getting expense: Validation error: invalid ID: '-1'\n");
}

#[test]
fn id_space_exhaustion_is_reported_not_fatal() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join(".expense-tracker.json"),
        r#"[{"id":18446744073709551615,"description":"last","amount":1.0,"date":"2024-05-17T08:15:00Z"}]"#,
    )
    .unwrap();

    expense(&home)
        .args(["add", "--description", "y", "--amount", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error adding expense:"));
}
