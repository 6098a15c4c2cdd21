//! Budget allocation model
//!
//! The spending ceiling a user sets for one category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, UserId};
use super::money::Money;

/// The period a budget amount covers
///
/// Recorded for display; the alert engine compares amounts as they are,
/// whatever the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// A budget allocation for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    #[serde(default)]
    pub id: BudgetId,

    /// Owning user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    /// Category label this budget applies to
    pub category: String,

    /// Allocated amount
    pub amount: Money,

    /// Period the amount covers
    #[serde(default)]
    pub period: BudgetPeriod,

    /// When the row was created in the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Budget {
    /// Create a new monthly budget
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            id: BudgetId::new(),
            user_id: None,
            category: category.into(),
            amount,
            period: BudgetPeriod::Monthly,
            created_at: None,
        }
    }

    /// Set the period
    pub fn with_period(mut self, period: BudgetPeriod) -> Self {
        self.period = period;
        self
    }

    /// Set the owning user
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.category, self.amount, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget() {
        let budget = Budget::new("Housing", Money::from_major(1000));
        assert_eq!(budget.period, BudgetPeriod::Monthly);
        assert_eq!(budget.to_string(), "Housing: ₹1000.00 (Monthly)");
    }

    #[test]
    fn test_period_serialization() {
        let budget = Budget::new("Food", Money::from_major(500)).with_period(BudgetPeriod::Yearly);
        let json = serde_json::to_value(&budget).unwrap();
        assert_eq!(json["period"], "yearly");
        assert_eq!(json["amount"], 500);
    }

    #[test]
    fn test_deserialize_host_row() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "user_id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "category": "Food",
            "amount": 1000,
            "period": "monthly",
            "created_at": "2025-01-01T00:00:00Z"
        }"#;

        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.amount, Money::from_major(1000));
        assert_eq!(budget.period, BudgetPeriod::Monthly);
    }

    #[test]
    fn test_period_defaults_to_monthly() {
        let budget: Budget =
            serde_json::from_str(r#"{"category": "Food", "amount": 10}"#).unwrap();
        assert_eq!(budget.period, BudgetPeriod::Monthly);
    }
}
