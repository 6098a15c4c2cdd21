//! Expense aggregation
//!
//! Reduces an expense list to a grand total and per-category totals. The
//! per-category totals keep categories in the order they first appear in the
//! input, which is the order category alerts are reported in.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Expense, Money};

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Money,
    /// Number of expenses that contributed to `amount`
    pub count: usize,
}

/// Insertion-ordered mapping of category to total
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
    index: HashMap<String, usize>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `category`, appending the category if unseen
    pub fn add(&mut self, category: &str, amount: Money) {
        match self.index.get(category) {
            Some(&position) => {
                let entry = &mut self.entries[position];
                entry.amount += amount;
                entry.count += 1;
            }
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push(CategoryTotal {
                    category: category.to_string(),
                    amount,
                    count: 1,
                });
            }
        }
    }

    /// Total for a category, `None` if no expense carried it
    pub fn get(&self, category: &str) -> Option<Money> {
        self.index
            .get(category)
            .map(|&position| self.entries[position].amount)
    }

    /// Entries in first-occurrence order
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryTotal> {
        self.entries.iter()
    }

    /// Category names in first-occurrence order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.category.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every category total
    pub fn sum(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Consume into the ordered entries
    pub fn into_vec(self) -> Vec<CategoryTotal> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a CategoryTotals {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Result of aggregating an expense list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub overall_total: Money,
    pub per_category: CategoryTotals,
}

/// Sum expenses overall and per category, folding left to right
pub fn aggregate(expenses: &[Expense]) -> Aggregation {
    let aggregation = expenses
        .iter()
        .fold(Aggregation::default(), |mut acc, expense| {
            acc.overall_total += expense.amount;
            acc.per_category.add(&expense.category, expense.amount);
            acc
        });

    log::trace!(
        "aggregated {} expenses into {} categories, total {}",
        expenses.len(),
        aggregation.per_category.len(),
        aggregation.overall_total
    );

    aggregation
}
