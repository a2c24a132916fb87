//! Display formatting for terminal output
//!
//! Formats the ledger for the headless `show` command.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Ledger;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the expense list as a table
pub fn format_expense_table(ledger: &Ledger) -> String {
    let rows: Vec<ExpenseRow> = ledger
        .expenses
        .iter()
        .enumerate()
        .map(|(index, entry)| ExpenseRow {
            index,
            category: entry.category.clone(),
            amount: format!("{:.2}", entry.amount),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format the income/total/balance summary lines
pub fn format_summary(ledger: &Ledger) -> String {
    let totals = ledger.totals();
    format!(
        "Income:  {:.2}\nTotal:   {:.2}\nBalance: {:.2}",
        ledger.income, totals.total, totals.balance
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_contains_rows() {
        let mut ledger = Ledger::new();
        ledger.add_expense("Rent", "1200");

        let table = format_expense_table(&ledger);
        assert!(table.contains("Rent"));
        assert!(table.contains("1200.00"));
    }

    #[test]
    fn test_summary_lines() {
        let mut ledger = Ledger::new();
        ledger.set_income("3000");
        ledger.add_expense("Food", "200");
        ledger.add_expense("Rent", "1200");

        let summary = format_summary(&ledger);
        assert!(summary.contains("Income:  3000.00"));
        assert!(summary.contains("Total:   1400.00"));
        assert!(summary.contains("Balance: 1600.00"));
    }
}
