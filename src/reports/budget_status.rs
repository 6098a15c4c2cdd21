//! Budget Status Report
//!
//! One row per budget showing budgeted, spent and remaining amounts with
//! the usage tier the alert engine would assign.

use crate::display::{format_percentage, truncate};
use crate::error::{SpendguardError, SpendguardResult};
use crate::models::{Budget, BudgetPeriod, Expense, Money};
use crate::services::{aggregate, classify, usage_ratio, Tier};
use std::io::Write;

/// A row in the budget status report
#[derive(Debug, Clone)]
pub struct BudgetStatusRow {
    /// Category the budget applies to
    pub category: String,
    pub period: BudgetPeriod,
    pub budgeted: Money,
    /// Spending recorded against the category
    pub spent: Money,
    /// Budgeted minus spent, negative when overspent
    pub remaining: Money,
    pub ratio: f64,
    pub tier: Tier,
}

impl BudgetStatusRow {
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }

    pub fn usage_percentage(&self) -> f64 {
        self.ratio * 100.0
    }
}

/// Budget Status Report
#[derive(Debug, Clone)]
pub struct BudgetStatusReport {
    /// Rows in budget order
    pub rows: Vec<BudgetStatusRow>,
    pub total_budgeted: Money,
    /// Spending across every category, budgeted or not
    pub total_spent: Money,
    /// Spending in categories that have no budget
    pub unbudgeted_spent: Money,
}

impl BudgetStatusReport {
    /// Generate the report
    pub fn generate(expenses: &[Expense], budgets: &[Budget]) -> Self {
        let aggregation = aggregate(expenses);

        let rows: Vec<BudgetStatusRow> = budgets
            .iter()
            .map(|budget| {
                let spent = aggregation
                    .per_category
                    .get(&budget.category)
                    .unwrap_or_default();
                let tier = classify(spent, Some(budget.amount))
                    .tier()
                    .unwrap_or(Tier::None);

                BudgetStatusRow {
                    category: budget.category.clone(),
                    period: budget.period,
                    budgeted: budget.amount,
                    spent,
                    remaining: budget.amount - spent,
                    ratio: usage_ratio(spent, budget.amount),
                    tier,
                }
            })
            .collect();

        let unbudgeted_spent = aggregation
            .per_category
            .iter()
            .filter(|entry| !budgets.iter().any(|b| b.category == entry.category))
            .map(|entry| entry.amount)
            .sum();

        Self {
            total_budgeted: rows.iter().map(|r| r.budgeted).sum(),
            total_spent: aggregation.overall_total,
            unbudgeted_spent,
            rows,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Budget Status\n");
        output.push_str(&"=".repeat(80));
        output.push('\n');

        output.push_str(&format!(
            "{:<20} {:<8} {:>12} {:>12} {:>12} {:>7} {:<7}\n",
            "Category", "Period", "Budgeted", "Spent", "Remaining", "Used", "Status"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budgets set.\n");
        }

        for row in &self.rows {
            let remaining_display = if row.is_overspent() {
                format!("{} *", row.remaining.format_with_symbol(symbol))
            } else {
                row.remaining.format_with_symbol(symbol)
            };

            output.push_str(&format!(
                "{:<20} {:<8} {:>12} {:>12} {:>12} {:>7} {:<7}\n",
                truncate(&row.category, 20),
                row.period.to_string(),
                row.budgeted.format_with_symbol(symbol),
                row.spent.format_with_symbol(symbol),
                remaining_display,
                format_percentage(row.usage_percentage()),
                row.tier.to_string()
            ));
        }

        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<29} {:>12} {:>12}\n",
            "TOTAL",
            self.total_budgeted.format_with_symbol(symbol),
            self.total_spent.format_with_symbol(symbol)
        ));
        if !self.unbudgeted_spent.is_zero() {
            output.push_str(&format!(
                "Spent without a budget: {}\n",
                self.unbudgeted_spent.format_with_symbol(symbol)
            ));
        }

        output.push_str("\n* = Overspent\n");

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendguardResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record([
            "Category",
            "Period",
            "Budgeted",
            "Spent",
            "Remaining",
            "Used",
            "Status",
        ])?;

        for row in &self.rows {
            csv.write_record([
                row.category.clone(),
                row.period.to_string(),
                row.budgeted.to_decimal_string(),
                row.spent.to_decimal_string(),
                row.remaining.to_decimal_string(),
                format_percentage(row.usage_percentage()),
                row.tier.to_string(),
            ])?;
        }

        csv.write_record([
            "TOTAL".to_string(),
            String::new(),
            self.total_budgeted.to_decimal_string(),
            self.total_spent.to_decimal_string(),
            String::new(),
            String::new(),
            String::new(),
        ])?;

        csv.flush()
            .map_err(|e| SpendguardError::Export(e.to_string()))
    }

    /// Rows whose spending has gone past the budget
    pub fn overspent_rows(&self) -> Vec<&BudgetStatusRow> {
        self.rows.iter().filter(|r| r.is_overspent()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(category: &str, major: i64) -> Expense {
        Expense::new(
            category,
            Money::from_major(major),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    fn setup() -> (Vec<Expense>, Vec<Budget>) {
        let expenses = vec![
            expense("Food", 800),
            expense("Housing", 1200),
            expense("Travel", 50),
        ];
        let budgets = vec![
            Budget::new("Housing", Money::from_major(1000)),
            Budget::new("Food", Money::from_major(1000)),
            Budget::new("Books", Money::from_major(200)).with_period(BudgetPeriod::Yearly),
        ];
        (expenses, budgets)
    }

    #[test]
    fn test_generate_report() {
        let (expenses, budgets) = setup();
        let report = BudgetStatusReport::generate(&expenses, &budgets);

        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[0].category, "Housing");
        assert_eq!(report.rows[0].tier, Tier::Danger);
        assert_eq!(report.rows[0].remaining, Money::from_major(-200));

        assert_eq!(report.rows[1].category, "Food");
        assert_eq!(report.rows[1].tier, Tier::Warning);

        assert_eq!(report.rows[2].spent, Money::zero());
        assert_eq!(report.rows[2].tier, Tier::None);

        assert_eq!(report.total_budgeted, Money::from_major(2200));
        assert_eq!(report.total_spent, Money::from_major(2050));
        assert_eq!(report.unbudgeted_spent, Money::from_major(50));
        assert_eq!(report.overspent_rows().len(), 1);
    }

    #[test]
    fn test_csv_export() {
        let (expenses, budgets) = setup();
        let report = BudgetStatusReport::generate(&expenses, &budgets);

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines[0], "Category,Period,Budgeted,Spent,Remaining,Used,Status");
        assert_eq!(lines[1], "Housing,Monthly,1000.00,1200.00,-200.00,120.0%,Danger");
        assert_eq!(lines[2], "Food,Monthly,1000.00,800.00,200.00,80.0%,Warning");
        assert_eq!(lines[3], "Books,Yearly,200.00,0.00,200.00,0.0%,OK");
        assert_eq!(lines[4], "TOTAL,,2200.00,2050.00,,,");
    }

    #[test]
    fn test_terminal_format() {
        let (expenses, budgets) = setup();
        let report = BudgetStatusReport::generate(&expenses, &budgets);
        let output = report.format_terminal("₹");

        assert!(output.contains("Budget Status"));
        assert!(output.contains("₹-200.00 *"));
        assert!(output.contains("Spent without a budget: ₹50.00"));
        assert!(output.contains("TOTAL"));
    }

    #[test]
    fn test_zero_budget_renders_infinite_usage() {
        let report = BudgetStatusReport::generate(
            &[expense("Gifts", 10)],
            &[Budget::new("Gifts", Money::zero())],
        );
        assert!(report.rows[0].ratio.is_infinite());
        assert_eq!(report.rows[0].tier, Tier::Danger);

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();
        let csv_string = String::from_utf8(csv_output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines[1], "Gifts,Monthly,0.00,10.00,-10.00,∞%,Danger");
        assert!(!csv_string.contains("inf"));

        let output = report.format_terminal("₹");
        assert!(output.contains("∞%"));
        assert!(!output.contains("inf"));
    }

    #[test]
    fn test_no_budgets() {
        let report = BudgetStatusReport::generate(&[expense("Food", 10)], &[]);
        assert!(report.rows.is_empty());
        assert!(report.format_terminal("₹").contains("No budgets set."));
    }
}
