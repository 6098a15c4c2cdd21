//! Reports module for spendguard
//!
//! Provides the dashboard summary, budget status, spending breakdown and
//! expense register reports.

pub mod budget_status;
pub mod dashboard;
pub mod expense_register;
pub mod spending;

pub use budget_status::{BudgetStatusReport, BudgetStatusRow};
pub use dashboard::{CategoryShare, DashboardSummary, UsageBand};
pub use expense_register::{ExpenseRegisterReport, RegisterFilter};
pub use spending::{SpendingByCategory, SpendingReport};
