//! CLI commands for data export
//!
//! Provides commands for exporting records and alerts in various formats.

use crate::error::{SpendguardError, SpendguardResult};
use crate::export::{csv, json, yaml, FullExport};
use crate::services::generate_alerts;
use crate::storage::Storage;
use clap::{Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::report::create_output;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (full snapshot)
    Json,
    /// YAML format (full snapshot, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export records, totals and alerts to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export expenses to CSV
    Expenses {
        /// Output file path
        output: PathBuf,
    },

    /// Export alerts to CSV
    Alerts {
        /// Output file path
        output: PathBuf,
    },

    /// Read back a JSON or YAML snapshot and check its totals
    Verify {
        /// Snapshot file (.yaml/.yml is read as YAML, anything else as JSON)
        input: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> SpendguardResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => handle_export_all(storage, output, format, pretty),
        ExportCommands::Expenses { output } => handle_export_expenses(storage, output),
        ExportCommands::Alerts { output } => handle_export_alerts(storage, output),
        ExportCommands::Verify { input } => handle_verify(&input),
    }
}

/// Handle full export
fn handle_export_all(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> SpendguardResult<()> {
    let mut writer = create_output(&output)?;

    match format {
        ExportFormat::Csv => {
            csv::export_expenses_csv(storage.expenses(), &mut writer)?;
            println!("Expenses exported to: {}", output.display());
            println!("Note: CSV format exports expenses only. Use JSON or YAML for a full snapshot.");
        }
        ExportFormat::Json => {
            json::export_full_json(storage.expenses(), storage.budgets(), &mut writer, pretty)?;
            println!("Full snapshot exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            yaml::export_full_yaml(storage.expenses(), storage.budgets(), &mut writer)?;
            println!("Full snapshot exported to: {}", output.display());
        }
    }

    writer.flush()?;
    Ok(())
}

/// Handle expenses export
fn handle_export_expenses(storage: &Storage, output: PathBuf) -> SpendguardResult<()> {
    let mut writer = create_output(&output)?;
    csv::export_expenses_csv(storage.expenses(), &mut writer)?;
    writer.flush()?;

    println!(
        "Exported {} expenses to: {}",
        storage.expenses().len(),
        output.display()
    );

    Ok(())
}

/// Handle alerts export
fn handle_export_alerts(storage: &Storage, output: PathBuf) -> SpendguardResult<()> {
    let alerts = generate_alerts(storage.expenses(), storage.budgets());

    let mut writer = create_output(&output)?;
    csv::export_alerts_csv(&alerts, &mut writer)?;
    writer.flush()?;

    println!("Exported {} alerts to: {}", alerts.len(), output.display());

    Ok(())
}

/// Handle snapshot verification
fn handle_verify(input: &Path) -> SpendguardResult<()> {
    let snapshot = read_snapshot(input)?;

    println!("Snapshot OK: {}", input.display());
    println!("  Schema version: {}", snapshot.schema_version);
    println!("  Created by:     spendguard {}", snapshot.app_version);
    println!(
        "  Expenses: {}  Budgets: {}  Alerts: {}",
        snapshot.expenses.len(),
        snapshot.budgets.len(),
        snapshot.alerts.len()
    );

    Ok(())
}

fn read_snapshot(input: &Path) -> SpendguardResult<FullExport> {
    let contents = std::fs::read_to_string(input).map_err(|e| {
        SpendguardError::Export(format!("Failed to read {}: {}", input.display(), e))
    })?;

    let is_yaml = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    log::debug!(
        "verifying {} as {}",
        input.display(),
        if is_yaml { "YAML" } else { "JSON" }
    );

    if is_yaml {
        yaml::import_from_yaml(&contents)
    } else {
        json::import_from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Expense, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn records() -> (Vec<Expense>, Vec<Budget>) {
        let expenses = vec![Expense::new(
            "Food",
            Money::from_major(950),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )];
        let budgets = vec![Budget::new("Food", Money::from_major(1000))];
        (expenses, budgets)
    }

    #[test]
    fn test_read_snapshot_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let (expenses, budgets) = records();

        let json_path = temp_dir.path().join("snapshot.json");
        let mut buffer = Vec::new();
        json::export_full_json(&expenses, &budgets, &mut buffer, true).unwrap();
        std::fs::write(&json_path, &buffer).unwrap();

        let yaml_path = temp_dir.path().join("snapshot.YML");
        let mut buffer = Vec::new();
        yaml::export_full_yaml(&expenses, &budgets, &mut buffer).unwrap();
        std::fs::write(&yaml_path, &buffer).unwrap();

        for path in [&json_path, &yaml_path] {
            let snapshot = read_snapshot(path).unwrap();
            assert_eq!(snapshot.expenses.len(), 1);
            assert_eq!(snapshot.overall_total, Money::from_major(950));
            assert_eq!(snapshot.alerts.len(), 2);
        }
    }

    #[test]
    fn test_read_snapshot_rejects_tampered_totals() {
        let temp_dir = TempDir::new().unwrap();
        let (expenses, budgets) = records();

        let mut buffer = Vec::new();
        json::export_full_json(&expenses, &budgets, &mut buffer, false).unwrap();
        let tampered = String::from_utf8(buffer)
            .unwrap()
            .replace("\"overall_total\":950", "\"overall_total\":951");

        let path = temp_dir.path().join("snapshot.json");
        std::fs::write(&path, tampered).unwrap();

        assert!(read_snapshot(&path).unwrap_err().is_validation());
        assert!(read_snapshot(&temp_dir.path().join("missing.json")).is_err());
    }
}
