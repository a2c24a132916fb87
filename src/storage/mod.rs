//! Snapshot storage for Budgetpad
//!
//! One ledger, one slot: the store serializes the current ledger plus a save
//! timestamp to a single well-known JSON file, overwriting unconditionally.
//! Loading tolerates a missing or corrupt slot so that bad data can never
//! block startup.

pub mod file_io;

pub use file_io::{read_json_opt, write_json_atomic};

use std::fs;
use std::path::PathBuf;

use crate::error::BudgetResult;
use crate::models::{Ledger, Snapshot};

/// The single-slot snapshot store
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store over the given slot path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the slot
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Write the current ledger state to the slot, stamped now.
    /// Last write wins; any prior snapshot is overwritten.
    pub fn save(&self, ledger: &Ledger) -> BudgetResult<Snapshot> {
        let snapshot = Snapshot::capture(ledger);
        write_json_atomic(&self.path, &snapshot)?;
        Ok(snapshot)
    }

    /// Read the slot.
    ///
    /// Returns `None` when the slot is missing. A malformed slot is logged
    /// and also returns `None` rather than propagating, so a corrupt
    /// snapshot never blocks startup.
    pub fn load(&self) -> Option<Snapshot> {
        match read_json_opt::<Snapshot, _>(&self.path) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!("discarding unreadable snapshot: {}", err);
                None
            }
        }
    }

    /// Delete the slot. A missing slot is not an error.
    pub fn clear(&self) -> BudgetResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// The stored serialized text, verbatim. `None` when the slot is missing
    /// or unreadable.
    pub fn raw(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, SnapshotStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path().join("budget_v1.json"));
        (temp_dir, store)
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.set_income("3000");
        ledger.add_expense("Food", "200");
        ledger.add_expense("Rent", "1200");
        ledger
    }

    #[test]
    fn test_load_missing_slot() {
        let (_temp, store) = test_store();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_temp, store) = test_store();
        let ledger = sample_ledger();

        store.save(&ledger).unwrap();
        let restored = store.load().unwrap().into_ledger();

        assert_eq!(restored, ledger);
    }

    #[test]
    fn test_save_overwrites_unconditionally() {
        let (_temp, store) = test_store();
        store.save(&sample_ledger()).unwrap();

        let mut second = Ledger::new();
        second.set_income("50");
        store.save(&second).unwrap();

        let restored = store.load().unwrap().into_ledger();
        assert_eq!(restored, second);
    }

    #[test]
    fn test_corrupt_slot_loads_as_none() {
        let (_temp, store) = test_store();
        fs::write(store.path(), "{ definitely not json").unwrap();

        assert!(store.load().is_none());
        // The corrupt content stays in place for inspection
        assert!(store.path().exists());
    }

    #[test]
    fn test_clear_deletes_slot() {
        let (_temp, store) = test_store();
        store.save(&sample_ledger()).unwrap();

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_missing_slot_is_ok() {
        let (_temp, store) = test_store();
        store.clear().unwrap();
    }

    #[test]
    fn test_raw_matches_stored_bytes() {
        let (_temp, store) = test_store();
        store.save(&sample_ledger()).unwrap();

        let raw = store.raw().unwrap();
        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, on_disk);
        assert!(raw.contains("\"savedAt\""));
    }
}
