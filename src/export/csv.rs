//! CSV Export functionality
//!
//! Exports expenses and alerts to spreadsheet-compatible CSV.

use crate::error::{SpendguardError, SpendguardResult};
use crate::models::{Alert, Expense};
use std::io::Write;

/// Export expenses to CSV in input order
///
/// The columns match what `load_expenses` reads back.
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> SpendguardResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Date", "Description", "Category", "Amount"])?;

    for expense in expenses {
        csv.write_record([
            expense.date.to_string(),
            expense.description.clone(),
            expense.category.clone(),
            expense.amount.to_decimal_string(),
        ])?;
    }

    csv.flush()
        .map_err(|e| SpendguardError::Export(e.to_string()))?;
    log::debug!("exported {} expenses", expenses.len());
    Ok(())
}

/// Export alerts to CSV in display order
pub fn export_alerts_csv<W: Write>(alerts: &[Alert], writer: &mut W) -> SpendguardResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Severity", "Category", "Message"])?;

    for alert in alerts {
        csv.write_record([
            alert.severity.to_string(),
            alert.category.clone().unwrap_or_default(),
            alert.message.clone(),
        ])?;
    }

    csv.flush()
        .map_err(|e| SpendguardError::Export(e.to_string()))?;
    Ok(())
}
