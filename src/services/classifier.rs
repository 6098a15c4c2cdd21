//! Usage ratio classification
//!
//! Maps spent-versus-budgeted to a severity tier. Thresholds are strict:
//! a ratio of exactly 0.75, 0.9 or 1.0 stays in the lower tier.

use serde::{Deserialize, Serialize};

use crate::models::{Money, Severity};

/// Above this ratio spending is reported as a warning
pub const WARNING_RATIO: f64 = 0.75;

/// Above this ratio spending is reported as danger
pub const DANGER_RATIO: f64 = 0.9;

/// Above this ratio the budget has been exceeded
pub const OVER_BUDGET_RATIO: f64 = 1.0;

/// Severity tier, ordered `None < Warning < Danger`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    None,
    Warning,
    Danger,
}

impl Tier {
    /// Tier for a usage ratio. NaN compares false everywhere and lands in `None`.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > DANGER_RATIO {
            Tier::Danger
        } else if ratio > WARNING_RATIO {
            Tier::Warning
        } else {
            Tier::None
        }
    }

    /// The alert severity this tier produces, if any
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Tier::None => None,
            Tier::Warning => Some(Severity::Warning),
            Tier::Danger => Some(Severity::Danger),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::None => write!(f, "OK"),
            Tier::Warning => write!(f, "Warning"),
            Tier::Danger => write!(f, "Danger"),
        }
    }
}

/// Outcome of comparing spending with an optional budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// No budget exists for the category
    NoBudget,
    Tiered {
        ratio: f64,
        tier: Tier,
        /// `spent - budgeted`, only when the ratio is above 1.0
        over_budget_by: Option<Money>,
    },
}

impl Classification {
    /// The tier, `None` for [`Classification::NoBudget`]
    pub fn tier(&self) -> Option<Tier> {
        match self {
            Classification::NoBudget => None,
            Classification::Tiered { tier, .. } => Some(*tier),
        }
    }

    pub fn ratio(&self) -> Option<f64> {
        match self {
            Classification::NoBudget => None,
            Classification::Tiered { ratio, .. } => Some(*ratio),
        }
    }
}

/// `spent / budgeted`, with a zero budget giving +inf when anything was spent
/// and 0 otherwise
pub fn usage_ratio(spent: Money, budgeted: Money) -> f64 {
    if budgeted.is_zero() {
        if spent.is_positive() {
            f64::INFINITY
        } else {
            0.0
        }
    } else {
        spent.cents() as f64 / budgeted.cents() as f64
    }
}

/// Classify spending against an optional budget
pub fn classify(spent: Money, budgeted: Option<Money>) -> Classification {
    let Some(budgeted) = budgeted else {
        return Classification::NoBudget;
    };

    let ratio = usage_ratio(spent, budgeted);
    let over_budget_by = (ratio > OVER_BUDGET_RATIO).then(|| spent - budgeted);

    Classification::Tiered {
        ratio,
        tier: Tier::from_ratio(ratio),
        over_budget_by,
    }
}
