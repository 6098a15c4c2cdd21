//! Record validation
//!
//! The entry forms of the hosted app reject negative amounts and blank
//! categories, but rows can still reach us from imports or older clients.
//! Issues are reported to the user; records are never dropped or altered,
//! and the alert engine sums whatever it is given.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Budget, BudgetId, Expense, ExpenseId};

/// The record an issue refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRef {
    Expense(ExpenseId),
    Budget(BudgetId),
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense(id) => write!(f, "expense {}", id),
            Self::Budget(id) => write!(f, "budget {}", id),
        }
    }
}

/// What is wrong with a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    NegativeAmount,
    EmptyCategory,
    /// Another budget for the same category appeared earlier and takes precedence
    DuplicateBudget { category: String },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "amount is negative"),
            Self::EmptyCategory => write!(f, "category is empty"),
            Self::DuplicateBudget { category } => write!(
                f,
                "duplicate budget for '{}' (the first one is used)",
                category
            ),
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub record: RecordRef,
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.record, self.kind)
    }
}

/// Validate expenses then budgets, reporting issues in input order
pub fn validate_records(expenses: &[Expense], budgets: &[Budget]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for expense in expenses {
        let record = RecordRef::Expense(expense.id);
        if expense.amount.is_negative() {
            issues.push(ValidationIssue {
                record,
                kind: IssueKind::NegativeAmount,
            });
        }
        if expense.category.trim().is_empty() {
            issues.push(ValidationIssue {
                record,
                kind: IssueKind::EmptyCategory,
            });
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for budget in budgets {
        let record = RecordRef::Budget(budget.id);
        if budget.amount.is_negative() {
            issues.push(ValidationIssue {
                record,
                kind: IssueKind::NegativeAmount,
            });
        }
        if budget.category.trim().is_empty() {
            issues.push(ValidationIssue {
                record,
                kind: IssueKind::EmptyCategory,
            });
        }
        if !seen.insert(budget.category.as_str()) {
            issues.push(ValidationIssue {
                record,
                kind: IssueKind::DuplicateBudget {
                    category: budget.category.clone(),
                },
            });
        }
    }

    issues
}
