//! Expense Register Report
//!
//! Lists expenses newest first with optional category and date filtering.

use crate::display::truncate;
use crate::error::{SpendguardError, SpendguardResult};
use crate::models::{Expense, Money};
use chrono::NaiveDate;
use std::io::Write;

/// Filter options for the register report
#[derive(Debug, Clone, Default)]
pub struct RegisterFilter {
    /// Filter by start date, inclusive
    pub start_date: Option<NaiveDate>,
    /// Filter by end date, inclusive
    pub end_date: Option<NaiveDate>,
    /// Filter by category (exact match)
    pub category: Option<String>,
}

impl RegisterFilter {
    /// Check if an expense matches this filter
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }
        if let Some(ref category) = self.category {
            if expense.category != *category {
                return false;
            }
        }

        true
    }
}

/// Expense Register Report
#[derive(Debug, Clone)]
pub struct ExpenseRegisterReport {
    /// Matching expenses, newest first
    pub entries: Vec<Expense>,
    pub total: Money,
    pub filter: RegisterFilter,
}

impl ExpenseRegisterReport {
    /// Generate a register report
    pub fn generate(expenses: &[Expense], filter: RegisterFilter) -> Self {
        let mut entries: Vec<Expense> = expenses
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();

        // Stable: same-day expenses keep file order
        entries.sort_by(|a, b| b.date.cmp(&a.date));

        Self {
            total: entries.iter().map(|e| e.amount).sum(),
            entries,
            filter,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str, date_format: &str) -> String {
        let mut output = String::new();

        output.push_str("Expense Register\n");
        output.push_str(&"=".repeat(80));
        output.push('\n');

        if let Some(ref category) = self.filter.category {
            output.push_str(&format!("Category: {} ", category));
        }
        if let Some(start) = self.filter.start_date {
            output.push_str(&format!("From: {} ", start));
        }
        if let Some(end) = self.filter.end_date {
            output.push_str(&format!("To: {} ", end));
        }
        output.push('\n');

        output.push_str(&format!(
            "{:<12} {:<30} {:<20} {:>14}\n",
            "Date", "Description", "Category", "Amount"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for entry in &self.entries {
            output.push_str(&format!(
                "{:<12} {:<30} {:<20} {:>14}\n",
                entry.date.format(date_format).to_string(),
                truncate(&entry.description, 30),
                truncate(&entry.category, 20),
                entry.amount.format_with_symbol(symbol)
            ));
        }

        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "Total: {}  |  Expenses: {}\n",
            self.total.format_with_symbol(symbol),
            self.entries.len()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendguardResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Date", "Description", "Category", "Amount"])?;

        for entry in &self.entries {
            csv.write_record([
                entry.date.to_string(),
                entry.description.clone(),
                entry.category.clone(),
                entry.amount.to_decimal_string(),
            ])?;
        }

        csv.flush()
            .map_err(|e| SpendguardError::Export(e.to_string()))
    }
}
