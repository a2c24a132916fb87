//! CSV export
//!
//! Renders the current ledger as CSV: a `Category,Amount` header, one row per
//! expense, then trailing `Total` and `Income` rows. Amounts are fixed to two
//! decimal places.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Ledger;

/// Write the ledger as CSV
pub fn write_csv<W: Write>(ledger: &Ledger, writer: &mut W) -> BudgetResult<()> {
    writeln!(writer, "Category,Amount").map_err(export_err)?;

    for entry in &ledger.expenses {
        writeln!(writer, "{},{:.2}", escape_csv(&entry.category), entry.amount)
            .map_err(export_err)?;
    }

    let totals = ledger.totals();
    writeln!(writer, "Total,{:.2}", totals.total).map_err(export_err)?;
    writeln!(writer, "Income,{:.2}", ledger.income).map_err(export_err)?;

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn export_err(e: std::io::Error) -> BudgetError {
    BudgetError::Export(e.to_string())
}
