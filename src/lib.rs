//! spendguard - expense totals, budget usage and spending alerts
//!
//! This library provides the core functionality for spendguard. Given a
//! user's expense records and budget records it computes the overall and
//! per-category spending totals, compares them against the budgets and
//! derives an ordered list of warning and danger alerts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, budgets, alerts)
//! - `storage`: JSON/CSV record loading
//! - `services`: The alert engine and record validation
//! - `reports`: Dashboard, budget status, spending and register reports
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use spendguard::models::{Budget, Expense, Money};
//! use spendguard::services::generate_alerts;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let expenses = vec![Expense::new("Food", Money::from_major(950), date)];
//! let budgets = vec![Budget::new("Food", Money::from_major(1000))];
//!
//! let alerts = generate_alerts(&expenses, &budgets);
//! assert_eq!(
//!     alerts[0].message,
//!     "Overall expenses (₹950.00) have exceeded 90% of total budget (₹1000.00)"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::SpendguardError;
