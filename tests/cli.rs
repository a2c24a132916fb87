//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temp data directory via the
//! BUDGETPAD_DATA_DIR override.

use assert_cmd::Command;
use chrono::Utc;
use predicates::prelude::*;
use tempfile::TempDir;

use budgetpad::export::{export_filename, ExportFormat};

fn budgetpad(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budgetpad").unwrap();
    cmd.env("BUDGETPAD_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_income_show_round_trip() {
    let data_dir = TempDir::new().unwrap();

    budgetpad(&data_dir)
        .args(["income", "3000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income set to 3000.00"));

    budgetpad(&data_dir)
        .args(["add", "Food", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Food (200.00)"));

    budgetpad(&data_dir)
        .args(["add", "Rent", "1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: 1600.00"));

    // State persisted across invocations
    budgetpad(&data_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Total:   1400.00"))
        .stdout(predicate::str::contains("Balance: 1600.00"));
}

#[test]
fn unparsable_income_coerces_to_zero() {
    let data_dir = TempDir::new().unwrap();

    budgetpad(&data_dir)
        .args(["income", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income set to 0.00"));
}

#[test]
fn remove_out_of_range_is_silent() {
    let data_dir = TempDir::new().unwrap();

    budgetpad(&data_dir)
        .args(["remove", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing removed"));
}

#[test]
fn csv_export_exact_contents() {
    let data_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    budgetpad(&data_dir).args(["income", "3000"]).assert().success();
    budgetpad(&data_dir).args(["add", "Rent", "1200"]).assert().success();

    budgetpad(&data_dir)
        .args(["export", "csv", "--output"])
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("text/csv"));

    let filename = export_filename(ExportFormat::Csv, Utc::now().date_naive());
    let content = std::fs::read_to_string(out_dir.path().join(filename)).unwrap();
    assert_eq!(
        content,
        "Category,Amount\nRent,1200.00\nTotal,1200.00\nIncome,3000.00\n"
    );
}

#[test]
fn json_export_is_raw_snapshot() {
    let data_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    budgetpad(&data_dir).args(["add", "Food", "200"]).assert().success();

    budgetpad(&data_dir)
        .args(["export", "json", "--output"])
        .arg(out_dir.path())
        .assert()
        .success();

    let filename = export_filename(ExportFormat::Json, Utc::now().date_naive());
    let exported = std::fs::read_to_string(out_dir.path().join(filename)).unwrap();
    let stored = std::fs::read_to_string(data_dir.path().join("budget_v1.json")).unwrap();
    assert_eq!(exported, stored);
    assert!(exported.contains("\"savedAt\""));
}

#[test]
fn clear_requires_confirmation() {
    let data_dir = TempDir::new().unwrap();

    budgetpad(&data_dir).args(["add", "Rent", "1200"]).assert().success();

    // Declined at the prompt: nothing changes
    budgetpad(&data_dir)
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted"));
    assert!(data_dir.path().join("budget_v1.json").exists());

    // Pre-confirmed: ledger reset, snapshot deleted
    budgetpad(&data_dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared."));
    assert!(!data_dir.path().join("budget_v1.json").exists());

    budgetpad(&data_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn corrupt_snapshot_does_not_block_startup() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("budget_v1.json"), "{ broken").unwrap();

    budgetpad(&data_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}
