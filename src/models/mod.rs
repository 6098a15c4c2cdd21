//! Core data models for spendguard
//!
//! Expenses and budgets mirror the rows of the hosted store; alerts are
//! derived by the alert engine.

pub mod alert;
pub mod budget;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use alert::{Alert, Severity};
pub use budget::{Budget, BudgetPeriod};
pub use expense::Expense;
pub use ids::{BudgetId, ExpenseId, UserId};
pub use money::{Money, MoneyParseError, RUPEE};
pub use month::Month;
