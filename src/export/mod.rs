//! Export service
//!
//! Renders the ledger as a downloadable file payload: CSV of the current
//! entries or the raw persisted JSON snapshot. Filenames carry the export
//! date (`budget-YYYY-MM-DD.<ext>`), and delivery means writing the bytes
//! into a target directory.

pub mod csv;
pub mod json;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::ValueEnum;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Ledger;
use crate::storage::SnapshotStore;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with Total and Income footer rows
    Csv,
    /// The raw persisted snapshot, timestamp included
    Json,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// MIME type handed to the delivery mechanism
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

/// A rendered export payload ready for delivery
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// Deliver the payload by writing it into `dir`. Returns the full path.
    pub fn write_to_dir(&self, dir: &Path) -> BudgetResult<PathBuf> {
        let path = dir.join(&self.filename);
        fs::write(&path, &self.bytes).map_err(|e| {
            BudgetError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;
        Ok(path)
    }
}

/// Timestamped export filename: `budget-YYYY-MM-DD.<ext>`
pub fn export_filename(format: ExportFormat, date: NaiveDate) -> String {
    format!("budget-{}.{}", date.format("%Y-%m-%d"), format.extension())
}

/// Render the export payload for the given format
pub fn render(
    ledger: &Ledger,
    store: &SnapshotStore,
    format: ExportFormat,
    date: NaiveDate,
) -> BudgetResult<ExportFile> {
    let mut bytes = Vec::new();
    match format {
        ExportFormat::Csv => csv::write_csv(ledger, &mut bytes)?,
        ExportFormat::Json => json::write_json(store, &mut bytes)?,
    }

    Ok(ExportFile {
        filename: export_filename(format, date),
        mime_type: format.mime_type(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_filename_format() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(export_filename(ExportFormat::Csv, date), "budget-2026-08-07.csv");
        assert_eq!(export_filename(ExportFormat::Json, date), "budget-2026-08-07.json");
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ExportFormat::Csv.mime_type(), "text/csv");
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
    }

    #[test]
    fn test_render_and_deliver() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path().join("budget_v1.json"));

        let mut ledger = Ledger::new();
        ledger.set_income("3000");
        ledger.add_expense("Rent", "1200");
        store.save(&ledger).unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let file = render(&ledger, &store, ExportFormat::Csv, date).unwrap();
        assert_eq!(file.filename, "budget-2026-08-07.csv");

        let out_dir = temp_dir.path().join("out");
        fs::create_dir_all(&out_dir).unwrap();
        let written = file.write_to_dir(&out_dir).unwrap();

        let content = fs::read_to_string(written).unwrap();
        assert_eq!(
            content,
            "Category,Amount\nRent,1200.00\nTotal,1200.00\nIncome,3000.00\n"
        );
    }
}
