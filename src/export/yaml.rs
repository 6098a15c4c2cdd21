//! YAML Export functionality
//!
//! Exports the full snapshot to YAML for human reading.

use crate::error::{SpendguardError, SpendguardResult};
use crate::export::json::FullExport;
use crate::models::{Budget, Expense};
use std::io::Write;

/// Export the snapshot to YAML format
pub fn export_full_yaml<W: Write>(
    expenses: &[Expense],
    budgets: &[Budget],
    writer: &mut W,
) -> SpendguardResult<()> {
    let export = FullExport::from_records(expenses, budgets);

    writeln!(writer, "# spendguard snapshot export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(
        writer,
        "# Expenses: {}  Budgets: {}  Alerts: {}",
        export.expenses.len(),
        export.budgets.len(),
        export.alerts.len()
    )?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SpendguardError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> SpendguardResult<FullExport> {
    let export: FullExport = serde_yaml::from_str(yaml_str)
        .map_err(|e| SpendguardError::Validation(format!("invalid YAML export: {}", e)))?;

    export.validate().map_err(SpendguardError::Validation)?;

    Ok(export)
}
