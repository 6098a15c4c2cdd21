//! JSON Export functionality
//!
//! Exports a full snapshot of the records and everything derived from them
//! with schema versioning.

use crate::error::{SpendguardError, SpendguardResult};
use crate::models::{Alert, Budget, Expense, Money};
use crate::services::{CategoryTotal, SpendingAnalysis};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full snapshot export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Expense rows in input order
    pub expenses: Vec<Expense>,

    /// Budget rows in input order
    pub budgets: Vec<Budget>,

    pub overall_total: Money,

    pub total_budget: Money,

    /// Per-category totals in first-occurrence order
    pub category_totals: Vec<CategoryTotal>,

    /// Alerts in display order
    pub alerts: Vec<Alert>,
}

impl FullExport {
    /// Build a snapshot from the loaded records
    pub fn from_records(expenses: &[Expense], budgets: &[Budget]) -> Self {
        let analysis = SpendingAnalysis::new(expenses, budgets);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: expenses.to_vec(),
            budgets: budgets.to_vec(),
            overall_total: analysis.overall_total(),
            total_budget: analysis.total_budget,
            category_totals: analysis.aggregation.per_category.into_vec(),
            alerts: analysis.alerts,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        // Derived totals must agree with the rows they came from
        let expense_total: Money = self.expenses.iter().map(|e| e.amount).sum();
        if expense_total != self.overall_total {
            return Err(format!(
                "Overall total {} does not match expense rows ({})",
                self.overall_total, expense_total
            ));
        }

        let category_sum: Money = self.category_totals.iter().map(|c| c.amount).sum();
        if category_sum != self.overall_total {
            return Err(format!(
                "Category totals sum to {}, expected {}",
                category_sum, self.overall_total
            ));
        }

        Ok(())
    }
}

/// Export the snapshot to JSON
pub fn export_full_json<W: Write>(
    expenses: &[Expense],
    budgets: &[Budget],
    writer: &mut W,
    pretty: bool,
) -> SpendguardResult<()> {
    let export = FullExport::from_records(expenses, budgets);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| SpendguardError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export
pub fn import_from_json(json_str: &str) -> SpendguardResult<FullExport> {
    let export: FullExport = serde_json::from_str(json_str)?;

    export.validate().map_err(SpendguardError::Validation)?;

    Ok(export)
}
