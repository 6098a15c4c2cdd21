//! Expense model
//!
//! One spending event as stored by the hosted expense table.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseId, UserId};
use super::money::Money;

/// A single recorded expense
///
/// The alert engine never validates these; negative and zero amounts are
/// summed as they are. See [`crate::services::validation`] for the checks
/// the entry forms apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier (generated when the source row has none, e.g. CSV)
    #[serde(default)]
    pub id: ExpenseId,

    /// Owning user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    /// Amount spent
    pub amount: Money,

    /// Category label, matched exactly (case-sensitive, untrimmed)
    pub category: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Date of the expense
    pub date: NaiveDate,

    /// When the row was created in the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Expense {
    /// Create a new expense with a fresh ID
    pub fn new(category: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new(),
            user_id: None,
            amount,
            category: category.into(),
            description: String::new(),
            date,
            created_at: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the owning user
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new("Food", Money::from_major(250), test_date())
            .with_description("Groceries");
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount.cents(), 25000);
        assert_eq!(expense.description, "Groceries");
        assert!(expense.user_id.is_none());
    }

    #[test]
    fn test_display() {
        let expense = Expense::new("Food", Money::from_major(250), test_date())
            .with_description("Groceries");
        assert_eq!(expense.to_string(), "2025-01-15 Food ₹250.00 (Groceries)");
    }

    #[test]
    fn test_deserialize_host_row() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "user_id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "amount": 950.5,
            "category": "Food",
            "description": "Dinner",
            "date": "2025-01-15",
            "created_at": "2025-01-15T18:30:00Z"
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount.cents(), 95050);
        assert_eq!(expense.date, test_date());
        assert!(expense.user_id.is_some());
        assert!(expense.created_at.is_some());
    }

    #[test]
    fn test_deserialize_minimal_row() {
        let json = r#"{"amount": 10, "category": "Other", "date": "2025-01-15"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount, Money::from_major(10));
        assert!(expense.description.is_empty());
    }
}
