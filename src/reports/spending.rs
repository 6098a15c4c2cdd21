//! Spending Report
//!
//! Spending per category, largest first, with each category's share of the
//! overall total.

use crate::display::{format_bar, format_percentage, truncate};
use crate::error::{SpendguardError, SpendguardResult};
use crate::models::{Expense, Money};
use crate::services::aggregate;
use std::io::Write;

use super::dashboard::share_of;

/// Spending for one category
#[derive(Debug, Clone)]
pub struct SpendingByCategory {
    pub category: String,
    pub total_spending: Money,
    /// Number of expenses in the category
    pub expense_count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Categories sorted by spending, largest first
    pub categories: Vec<SpendingByCategory>,
    pub total_spending: Money,
    pub total_expenses: usize,
}

impl SpendingReport {
    /// Generate a spending report
    pub fn generate(expenses: &[Expense]) -> Self {
        let aggregation = aggregate(expenses);
        let total_spending = aggregation.overall_total;

        let mut categories: Vec<SpendingByCategory> = aggregation
            .per_category
            .iter()
            .map(|entry| SpendingByCategory {
                category: entry.category.clone(),
                total_spending: entry.amount,
                expense_count: entry.count,
                percentage: share_of(entry.amount, total_spending),
            })
            .collect();

        // Stable: ties keep first-occurrence order
        categories.sort_by(|a, b| b.total_spending.cmp(&a.total_spending));

        Self {
            categories,
            total_spending,
            total_expenses: expenses.len(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "Total Spending: {}  ({} expenses)\n\n",
            self.total_spending.format_with_symbol(symbol),
            self.total_expenses
        ));

        if self.categories.is_empty() {
            output.push_str("No spending recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<24} {:>14} {:>6} {:>7}  {}\n",
            "Category", "Amount", "Count", "Share", ""
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{:<24} {:>14} {:>6} {:>7}  {}\n",
                truncate(&category.category, 24),
                category.total_spending.format_with_symbol(symbol),
                category.expense_count,
                format_percentage(category.percentage),
                format_bar(category.percentage, 100.0, 20)
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendguardResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Category", "Amount", "Count", "Percentage"])?;

        for category in &self.categories {
            csv.write_record([
                category.category.clone(),
                category.total_spending.to_decimal_string(),
                category.expense_count.to_string(),
                format!("{:.2}", category.percentage),
            ])?;
        }

        csv.flush()
            .map_err(|e| SpendguardError::Export(e.to_string()))
    }

    /// Get the top spending categories
    pub fn top_categories(&self, limit: usize) -> Vec<&SpendingByCategory> {
        self.categories.iter().take(limit).collect()
    }

    /// Keep only the top `limit` categories
    pub fn truncated(mut self, limit: usize) -> Self {
        self.categories.truncate(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(category: &str, cents: i64) -> Expense {
        Expense::new(
            category,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    fn setup() -> Vec<Expense> {
        vec![
            expense("Food", 20000),
            expense("Housing", 50000),
            expense("Food", 5000),
            expense("Travel", 25000),
        ]
    }

    #[test]
    fn test_generate_report() {
        let report = SpendingReport::generate(&setup());

        assert_eq!(report.total_spending.cents(), 100000);
        assert_eq!(report.total_expenses, 4);
        assert_eq!(report.categories.len(), 3);
        assert_eq!(report.categories[0].category, "Housing");
        assert!((report.categories[0].percentage - 50.0).abs() < 1e-9);
        // Food and Travel tie at 25%; Food was seen first
        assert_eq!(report.categories[1].category, "Food");
        assert_eq!(report.categories[1].expense_count, 2);
        assert_eq!(report.categories[2].category, "Travel");
    }

    #[test]
    fn test_top_categories() {
        let report = SpendingReport::generate(&setup());
        let top = report.top_categories(1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].category, "Housing");

        let truncated = report.truncated(2);
        assert_eq!(truncated.categories.len(), 2);
        assert_eq!(truncated.total_spending.cents(), 100000);
    }

    #[test]
    fn test_csv_export() {
        let report = SpendingReport::generate(&setup());

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines[0], "Category,Amount,Count,Percentage");
        assert_eq!(lines[1], "Housing,500.00,1,50.00");
        assert_eq!(lines[2], "Food,250.00,2,25.00");
    }

    #[test]
    fn test_empty_report() {
        let report = SpendingReport::generate(&[]);
        assert!(report.categories.is_empty());
        assert!(report.format_terminal("₹").contains("No spending recorded."));
    }
}
