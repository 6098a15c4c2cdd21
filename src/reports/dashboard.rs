//! Dashboard summary
//!
//! The overview the hosted app shows on its landing page: overall budget
//! usage, the spending series per category, the most recent expenses and
//! the alert list.

use std::io::Write;

use serde::Serialize;

use crate::display::{
    double_separator, format_alert_list, format_bar, format_percentage, separator, truncate,
};
use crate::error::{SpendguardError, SpendguardResult};
use crate::models::{Alert, Budget, Expense, Money};
use crate::services::{usage_ratio, SpendingAnalysis};

/// Coarse band for the usage progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageBand {
    /// Ratio at or below 0.6
    Healthy,
    /// Ratio at or below 0.8
    Caution,
    Critical,
}

impl UsageBand {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= 0.6 {
            UsageBand::Healthy
        } else if ratio <= 0.8 {
            UsageBand::Caution
        } else {
            UsageBand::Critical
        }
    }
}

impl std::fmt::Display for UsageBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageBand::Healthy => write!(f, "Healthy"),
            UsageBand::Caution => write!(f, "Caution"),
            UsageBand::Critical => write!(f, "Critical"),
        }
    }
}

/// One point of the per-category spending series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Percentage of overall spending, 0 when nothing was spent overall
    pub share: f64,
}

/// Dashboard summary
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub total_budget: Money,
    pub total_expenses: Money,
    pub usage_ratio: f64,
    pub band: UsageBand,
    /// First-occurrence order
    pub categories: Vec<CategoryShare>,
    pub recent: Vec<Expense>,
    pub alerts: Vec<Alert>,
}

impl DashboardSummary {
    /// Build the summary, listing up to `recent_count` recent expenses
    pub fn generate(expenses: &[Expense], budgets: &[Budget], recent_count: usize) -> Self {
        let analysis = SpendingAnalysis::new(expenses, budgets);
        let total_expenses = analysis.overall_total();
        let ratio = usage_ratio(total_expenses, analysis.total_budget);

        let categories = analysis
            .aggregation
            .per_category
            .iter()
            .map(|entry| CategoryShare {
                category: entry.category.clone(),
                amount: entry.amount,
                share: share_of(entry.amount, total_expenses),
            })
            .collect();

        // Stable sort keeps input order among expenses on the same date
        let mut recent = expenses.to_vec();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(recent_count);

        Self {
            total_budget: analysis.total_budget,
            total_expenses,
            usage_ratio: ratio,
            band: UsageBand::from_ratio(ratio),
            categories,
            recent,
            alerts: analysis.alerts,
        }
    }

    /// Usage as a percentage, capped at 100 for the progress bar
    pub fn usage_percentage(&self) -> f64 {
        (self.usage_ratio * 100.0).min(100.0)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str, date_format: &str) -> String {
        let mut output = String::new();

        output.push_str("Budget Overview\n");
        output.push_str(&double_separator(72));
        output.push('\n');
        output.push_str(&format!(
            "Budget Usage  {} {:>7}  ({})\n",
            format_bar(self.usage_percentage(), 100.0, 40),
            format_percentage(self.usage_percentage()),
            self.band
        ));
        output.push_str(&format!(
            "Spent {} of {}\n\n",
            self.total_expenses.format_with_symbol(symbol),
            self.total_budget.format_with_symbol(symbol)
        ));

        output.push_str("Expense Distribution\n");
        output.push_str(&separator(72));
        output.push('\n');
        if self.categories.is_empty() {
            output.push_str("  No expenses recorded.\n");
        }
        for category in &self.categories {
            output.push_str(&format!(
                "  {:<20} {:>14} {} {:>6}\n",
                truncate(&category.category, 20),
                category.amount.format_with_symbol(symbol),
                format_bar(category.share, 100.0, 20),
                format_percentage(category.share)
            ));
        }

        output.push_str("\nRecent Expenses\n");
        output.push_str(&separator(72));
        output.push('\n');
        if self.recent.is_empty() {
            output.push_str("  No expenses recorded.\n");
        }
        for expense in &self.recent {
            output.push_str(&format!(
                "  {:<10}  {:<30} {:<16} {:>14}\n",
                expense.date.format(date_format).to_string(),
                truncate(&expense.description, 30),
                truncate(&expense.category, 16),
                expense.amount.format_with_symbol(symbol)
            ));
        }

        output.push_str("\nAlerts\n");
        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format_alert_list(&self.alerts));

        output
    }

    /// Export the category series to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendguardResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Category", "Amount", "Share"])?;
        for category in &self.categories {
            csv.write_record([
                category.category.clone(),
                category.amount.to_decimal_string(),
                format!("{:.2}", category.share),
            ])?;
        }
        csv.write_record([
            "TOTAL".to_string(),
            self.total_expenses.to_decimal_string(),
            String::new(),
        ])?;
        csv.flush()
            .map_err(|e| SpendguardError::Export(e.to_string()))
    }
}

/// `part` as a percentage of `total`
pub(crate) fn share_of(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        part.cents() as f64 / total.cents() as f64 * 100.0
    }
}
