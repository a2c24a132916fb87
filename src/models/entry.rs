//! Expense entries and input coercion
//!
//! All user input enters the ledger through the two coercion helpers here.
//! The policy is deliberately permissive: anything that does not parse as a
//! finite floating-point number becomes 0, and negative amounts are accepted
//! as-is (refunds/credits have always been representable this way).

use serde::{Deserialize, Serialize};

/// One category/amount pair in the ledger's expense list.
///
/// Entries are fungible value records ordered by insertion; they carry no
/// identity beyond their position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub category: String,
    pub amount: f64,
}

impl ExpenseEntry {
    /// Build an entry from raw user input, applying the coercion policy.
    pub fn from_input(category: &str, amount: &str) -> Self {
        Self {
            category: normalize_category(category),
            amount: coerce_amount(amount),
        }
    }
}

/// Which field of an entry an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Category,
    Amount,
}

/// Parse a raw amount string as a floating-point number.
///
/// Unparsable, empty, or non-finite input coerces to 0. Negative values pass
/// through unchecked.
pub fn coerce_amount(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Trim a raw category string, substituting "Unnamed" when empty after trim.
pub fn normalize_category(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        "Unnamed".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_valid_amounts() {
        assert_eq!(coerce_amount("1200"), 1200.0);
        assert_eq!(coerce_amount("10.50"), 10.5);
        assert_eq!(coerce_amount(" 3.25 "), 3.25);
    }

    #[test]
    fn test_coerce_unparsable_to_zero() {
        assert_eq!(coerce_amount("abc"), 0.0);
        assert_eq!(coerce_amount(""), 0.0);
        assert_eq!(coerce_amount("12,00"), 0.0);
    }

    #[test]
    fn test_coerce_non_finite_to_zero() {
        assert_eq!(coerce_amount("NaN"), 0.0);
        assert_eq!(coerce_amount("inf"), 0.0);
    }

    #[test]
    fn test_negative_amounts_pass_through() {
        assert_eq!(coerce_amount("-50"), -50.0);
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("Rent"), "Rent");
        assert_eq!(normalize_category("  Food  "), "Food");
        assert_eq!(normalize_category(""), "Unnamed");
        assert_eq!(normalize_category("   "), "Unnamed");
    }

    #[test]
    fn test_from_input() {
        let entry = ExpenseEntry::from_input("", "");
        assert_eq!(entry.category, "Unnamed");
        assert_eq!(entry.amount, 0.0);

        let entry = ExpenseEntry::from_input(" Rent ", "1200");
        assert_eq!(entry.category, "Rent");
        assert_eq!(entry.amount, 1200.0);
    }

    #[test]
    fn test_serialization() {
        let entry = ExpenseEntry::from_input("Rent", "1200");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"category":"Rent","amount":1200.0}"#);

        let deserialized: ExpenseEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
