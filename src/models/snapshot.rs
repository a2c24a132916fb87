//! The persisted form of a ledger
//!
//! A snapshot is the ledger plus the moment it was saved. The on-disk field
//! names are camelCase (`savedAt`); existing `budget_v1.json` slots already
//! use that form, so it must not change within the v1 schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entry::ExpenseEntry;
use super::ledger::Ledger;

/// A ledger plus its save timestamp, as written to the snapshot slot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
    pub saved_at: DateTime<Utc>,
}

impl Snapshot {
    /// Capture the current ledger state, stamped now
    pub fn capture(ledger: &Ledger) -> Self {
        Self {
            income: ledger.income,
            expenses: ledger.expenses.clone(),
            saved_at: Utc::now(),
        }
    }

    /// Rebuild the in-memory ledger, discarding the timestamp
    pub fn into_ledger(self) -> Ledger {
        Ledger {
            income: self.income,
            expenses: self.expenses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_and_restore() {
        let mut ledger = Ledger::new();
        ledger.set_income("3000");
        ledger.add_expense("Rent", "1200");

        let snapshot = Snapshot::capture(&ledger);
        assert_eq!(snapshot.income, 3000.0);
        assert_eq!(snapshot.expenses.len(), 1);

        let restored = snapshot.into_ledger();
        assert_eq!(restored, ledger);
    }

    #[test]
    fn test_saved_at_serializes_camel_case() {
        let snapshot = Snapshot::capture(&Ledger::new());
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"savedAt\""));
        assert!(!json.contains("saved_at"));
    }

    #[test]
    fn test_missing_fields_default() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"savedAt":"2026-01-05T10:00:00Z"}"#).unwrap();
        assert_eq!(snapshot.income, 0.0);
        assert!(snapshot.expenses.is_empty());
    }
}
