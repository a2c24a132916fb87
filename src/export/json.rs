//! JSON export
//!
//! Exports the persisted snapshot verbatim, timestamp included. This is a
//! passthrough of the stored text, not a re-serialization of the in-memory
//! ledger; an empty slot exports as `{}`.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::storage::SnapshotStore;

/// Write the stored snapshot as JSON
pub fn write_json<W: Write>(store: &SnapshotStore, writer: &mut W) -> BudgetResult<()> {
    let payload = store.raw().unwrap_or_else(|| "{}".to_string());
    writer
        .write_all(payload.as_bytes())
        .map_err(|e| BudgetError::Export(e.to_string()))
}
