//! Display formatting for terminal output
//!
//! Provides utilities for formatting alerts and report rows for the
//! terminal.

pub mod alert;
pub mod report;

pub use alert::{format_alert_list, NO_ALERTS};
pub use report::{double_separator, format_bar, format_percentage, separator, truncate};
