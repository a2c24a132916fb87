//! Presentation controller
//!
//! Owns the ledger and the snapshot store, and is the only mutation path in
//! the application. Every edit runs the same transition: mutate the ledger,
//! recompute the derived figures, save the snapshot, and hand back the
//! refreshed view state for the display and chart. Exports are read-only and
//! do not save.

use std::path::Path;

use chrono::NaiveDate;

use crate::chart::Breakdown;
use crate::error::BudgetResult;
use crate::export::{self, ExportFile, ExportFormat};
use crate::models::{ExpenseField, Ledger, Totals};
use crate::storage::SnapshotStore;

/// Refreshed figures pushed to the display and chart after every transition
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub total: f64,
    pub balance: f64,
    pub breakdown: Breakdown,
}

impl ViewState {
    fn of(ledger: &Ledger) -> Self {
        let Totals { total, balance } = ledger.totals();
        Self {
            total,
            balance,
            breakdown: Breakdown::from_ledger(ledger),
        }
    }
}

/// Mediates user actions into ledger mutations, auto-saving after each one
pub struct Controller {
    ledger: Ledger,
    store: SnapshotStore,
}

impl Controller {
    /// Hydrate from the snapshot store, falling back to an empty ledger when
    /// the slot is missing or corrupt.
    pub fn startup(store: SnapshotStore) -> Self {
        let ledger = store
            .load()
            .map(|snapshot| snapshot.into_ledger())
            .unwrap_or_default();
        Self { ledger, store }
    }

    /// Read access for views; all writes go through the methods below.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Current derived figures without mutating anything
    pub fn view(&self) -> ViewState {
        ViewState::of(&self.ledger)
    }

    /// Append an expense row. Blank inputs are legal placeholders.
    pub fn add_expense(&mut self, category: &str, amount: &str) -> BudgetResult<ViewState> {
        self.ledger.add_expense(category, amount);
        self.after_mutation()
    }

    /// Remove the row at `index`. Out of range is a complete no-op: nothing
    /// mutates, so nothing is saved.
    pub fn remove_expense(&mut self, index: usize) -> BudgetResult<ViewState> {
        if index >= self.ledger.expenses.len() {
            return Ok(self.view());
        }
        self.ledger.remove_expense(index);
        self.after_mutation()
    }

    /// Edit the category of the row at `index`
    pub fn edit_category(&mut self, index: usize, value: &str) -> BudgetResult<ViewState> {
        self.ledger.update_expense(index, ExpenseField::Category, value);
        self.after_mutation()
    }

    /// Edit the amount of the row at `index`
    pub fn edit_amount(&mut self, index: usize, value: &str) -> BudgetResult<ViewState> {
        self.ledger.update_expense(index, ExpenseField::Amount, value);
        self.after_mutation()
    }

    /// Edit the monthly income
    pub fn edit_income(&mut self, value: &str) -> BudgetResult<ViewState> {
        self.ledger.set_income(value);
        self.after_mutation()
    }

    /// Seed the two starter rows shown on a blank first launch
    pub fn seed_starter_rows(&mut self) -> BudgetResult<ViewState> {
        self.ledger.add_expense("Food", "");
        self.ledger.add_expense("Rent", "");
        self.after_mutation()
    }

    /// Render an export payload and deliver it into `dir`. Read-only: the
    /// snapshot is not rewritten.
    pub fn export(
        &self,
        format: ExportFormat,
        date: NaiveDate,
        dir: &Path,
    ) -> BudgetResult<ExportFile> {
        let file = export::render(&self.ledger, &self.store, format, date)?;
        file.write_to_dir(dir)?;
        Ok(file)
    }

    /// Reset the ledger and delete the snapshot.
    ///
    /// The caller is responsible for putting the confirmation prompt in front
    /// of the user; with `confirmed == false` nothing is mutated and the
    /// store is untouched.
    pub fn clear(&mut self, confirmed: bool) -> BudgetResult<Option<ViewState>> {
        if !confirmed {
            return Ok(None);
        }
        self.ledger = Ledger::new();
        self.store.clear()?;
        Ok(Some(self.view()))
    }

    fn after_mutation(&mut self) -> BudgetResult<ViewState> {
        self.store.save(&self.ledger)?;
        Ok(self.view())
    }
}
