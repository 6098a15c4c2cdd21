//! Budget lookup by category

use crate::models::{Budget, Money};

/// Amount of the first budget whose category equals `category`
///
/// Scans in input order with an exact, case-sensitive comparison. `None`
/// means no budget is set, which is not the same as a zero budget.
pub fn lookup_budget(budgets: &[Budget], category: &str) -> Option<Money> {
    budgets
        .iter()
        .find(|budget| budget.category == category)
        .map(|budget| budget.amount)
}

/// Sum of every budget amount, zero for an empty list
pub fn total_budget(budgets: &[Budget]) -> Money {
    budgets.iter().map(|budget| budget.amount).sum()
}
