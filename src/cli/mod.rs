//! CLI command handlers
//!
//! Headless access to the same controller the TUI drives. Each handler is a
//! single user action: mutate (auto-saving), or read and print.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Utc;

use crate::config::BudgetPaths;
use crate::controller::Controller;
use crate::display;
use crate::error::BudgetResult;
use crate::export::ExportFormat;

/// Print the expense table and summary
pub fn handle_show(controller: &Controller) {
    let ledger = controller.ledger();
    if ledger.expenses.is_empty() {
        println!("No expenses recorded.");
    } else {
        println!("{}", display::format_expense_table(ledger));
    }
    println!("{}", display::format_summary(ledger));
}

/// Append an expense row
pub fn handle_add(
    controller: &mut Controller,
    category: String,
    amount: Option<String>,
) -> BudgetResult<()> {
    let view = controller.add_expense(&category, amount.as_deref().unwrap_or(""))?;
    if let Some(added) = controller.ledger().expenses.last() {
        println!("Added {} ({:.2})", added.category, added.amount);
    }
    println!("Total: {:.2}  Balance: {:.2}", view.total, view.balance);
    Ok(())
}

/// Remove the expense row at `index`
pub fn handle_remove(controller: &mut Controller, index: usize) -> BudgetResult<()> {
    let existed = index < controller.ledger().expenses.len();
    let view = controller.remove_expense(index)?;
    if existed {
        println!("Removed row {}", index);
    } else {
        // Removing a row that's already gone is not an error
        println!("Row {} does not exist; nothing removed", index);
    }
    println!("Total: {:.2}  Balance: {:.2}", view.total, view.balance);
    Ok(())
}

/// Set the monthly income
pub fn handle_income(controller: &mut Controller, value: String) -> BudgetResult<()> {
    let view = controller.edit_income(&value)?;
    println!("Income set to {:.2}", controller.ledger().income);
    println!("Total: {:.2}  Balance: {:.2}", view.total, view.balance);
    Ok(())
}

/// Export the budget as CSV or JSON into a directory (default: cwd)
pub fn handle_export(
    controller: &Controller,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> BudgetResult<()> {
    let dir = output.unwrap_or_else(|| PathBuf::from("."));
    let date = Utc::now().date_naive();
    let file = controller.export(format, date, &dir)?;
    println!(
        "Exported to: {} ({})",
        dir.join(&file.filename).display(),
        file.mime_type
    );
    Ok(())
}

/// Reset the ledger and delete the stored snapshot, after confirmation.
/// `yes` pre-confirms; otherwise a blocking y/N prompt is shown.
pub fn handle_clear(controller: &mut Controller, yes: bool) -> BudgetResult<()> {
    let confirmed = yes || confirm_on_stdin("Clear all data? [y/N]: ")?;
    match controller.clear(confirmed)? {
        Some(_) => println!("All data cleared."),
        None => println!("Aborted; nothing changed."),
    }
    Ok(())
}

/// Show configuration and paths
pub fn handle_config(paths: &BudgetPaths) {
    println!("Budgetpad Configuration");
    println!("=======================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Snapshot slot:  {}", paths.snapshot_file().display());
}

/// Blocking yes/no prompt on stdin; anything but y/yes declines
fn confirm_on_stdin(message: &str) -> BudgetResult<bool> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
