//! The in-memory budget ledger
//!
//! Holds monthly income and the ordered expense list for one budgeting
//! period. Total and balance are derived, never stored.

use serde::{Deserialize, Serialize};

use super::entry::{coerce_amount, normalize_category, ExpenseEntry, ExpenseField};

/// Derived figures for the current ledger state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Sum of all expense amounts, including zero and negative entries
    pub total: f64,
    /// Income minus total
    pub balance: f64,
}

/// In-memory record of income and expense entries for one budgeting period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new expense entry at the end.
    ///
    /// Blank inputs are legal placeholders and coerce to `("Unnamed", 0)`.
    pub fn add_expense(&mut self, category: &str, amount: &str) {
        self.expenses.push(ExpenseEntry::from_input(category, amount));
    }

    /// Delete the entry at `index`. Out-of-range indices are a silent no-op,
    /// mirroring removal of a row that is already gone.
    pub fn remove_expense(&mut self, index: usize) {
        if index < self.expenses.len() {
            self.expenses.remove(index);
        }
    }

    /// Set income from raw input; unparsable input coerces to 0.
    pub fn set_income(&mut self, value: &str) {
        self.income = coerce_amount(value);
    }

    /// Mutate one field of one entry through the coercion rules.
    /// Out-of-range indices are a silent no-op, same as removal.
    pub fn update_expense(&mut self, index: usize, field: ExpenseField, value: &str) {
        let Some(entry) = self.expenses.get_mut(index) else {
            return;
        };
        match field {
            ExpenseField::Category => entry.category = normalize_category(value),
            ExpenseField::Amount => entry.amount = coerce_amount(value),
        }
    }

    /// Compute total and balance. Pure function of the current state.
    pub fn totals(&self) -> Totals {
        // Folded from +0.0 rather than summed: f64's Sum identity is -0.0,
        // which an empty ledger would render as "-0.00".
        let total = self.expenses.iter().fold(0.0, |acc, e| acc + e.amount);
        Totals {
            total,
            balance: self.income - total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.set_income("3000");
        ledger.add_expense("Food", "200");
        ledger.add_expense("Rent", "1200");
        ledger
    }

    #[test]
    fn test_totals_scenario() {
        let totals = sample_ledger().totals();
        assert_eq!(totals.total, 1400.0);
        assert_eq!(totals.balance, 1600.0);
    }

    #[test]
    fn test_balance_invariant() {
        let ledger = sample_ledger();
        let totals = ledger.totals();
        let sum: f64 = ledger.expenses.iter().map(|e| e.amount).sum();
        assert_eq!(totals.balance, ledger.income - sum);
    }

    #[test]
    fn test_empty_ledger_totals_to_zero() {
        let totals = Ledger::new().totals();
        assert_eq!(format!("{:.2}", totals.total), "0.00");
        assert_eq!(format!("{:.2}", totals.balance), "0.00");
    }

    #[test]
    fn test_totals_idempotent() {
        let ledger = sample_ledger();
        assert_eq!(ledger.totals(), ledger.totals());
    }

    #[test]
    fn test_unparsable_income_coerces_to_zero() {
        let mut ledger = sample_ledger();
        ledger.set_income("abc");
        let totals = ledger.totals();
        assert_eq!(ledger.income, 0.0);
        assert_eq!(totals.balance, -totals.total);
    }

    #[test]
    fn test_add_blank_placeholder() {
        let mut ledger = Ledger::new();
        ledger.add_expense("", "");
        assert_eq!(ledger.expenses.len(), 1);
        assert_eq!(ledger.expenses[0].category, "Unnamed");
        assert_eq!(ledger.expenses[0].amount, 0.0);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut ledger = sample_ledger();
        let before = ledger.clone();
        ledger.remove_expense(5);
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut ledger = sample_ledger();
        ledger.add_expense("Gas", "80");
        ledger.remove_expense(1);
        let categories: Vec<_> = ledger.expenses.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(categories, vec!["Food", "Gas"]);
    }

    #[test]
    fn test_update_expense_fields() {
        let mut ledger = sample_ledger();
        ledger.update_expense(0, ExpenseField::Category, "  Groceries ");
        ledger.update_expense(0, ExpenseField::Amount, "250.50");
        assert_eq!(ledger.expenses[0].category, "Groceries");
        assert_eq!(ledger.expenses[0].amount, 250.5);
    }

    #[test]
    fn test_update_coerces_garbage() {
        let mut ledger = sample_ledger();
        ledger.update_expense(1, ExpenseField::Amount, "lots");
        ledger.update_expense(1, ExpenseField::Category, "   ");
        assert_eq!(ledger.expenses[1].amount, 0.0);
        assert_eq!(ledger.expenses[1].category, "Unnamed");
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let mut ledger = sample_ledger();
        let before = ledger.clone();
        ledger.update_expense(9, ExpenseField::Amount, "42");
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_negative_amounts_counted() {
        let mut ledger = Ledger::new();
        ledger.set_income("100");
        ledger.add_expense("Refund", "-25");
        let totals = ledger.totals();
        assert_eq!(totals.total, -25.0);
        assert_eq!(totals.balance, 125.0);
    }
}
