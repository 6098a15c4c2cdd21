//! CLI commands for reports
//!
//! Provides commands for generating and exporting the spending reports.

use crate::config::settings::Settings;
use crate::error::{SpendguardError, SpendguardResult};
use crate::reports::{BudgetStatusReport, ExpenseRegisterReport, RegisterFilter, SpendingReport};
use crate::storage::Storage;
use chrono::NaiveDate;
use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Budgeted, spent and remaining amount for every budget
    #[command(alias = "budget-status")]
    Budget {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending by category, largest first
    Spending {
        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List expenses, newest first
    #[command(alias = "register")]
    Expenses {
        /// Only expenses in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> SpendguardResult<()> {
    match cmd {
        ReportCommands::Budget { output } => handle_budget_report(storage, settings, output),
        ReportCommands::Spending { top, output } => {
            handle_spending_report(storage, settings, top, output)
        }
        ReportCommands::Expenses {
            category,
            from,
            to,
            output,
        } => handle_expense_report(storage, settings, category, from, to, output),
    }
}

/// Handle budget status report
fn handle_budget_report(
    storage: &Storage,
    settings: &Settings,
    output: Option<PathBuf>,
) -> SpendguardResult<()> {
    let report = BudgetStatusReport::generate(storage.expenses(), storage.budgets());

    if let Some(path) = output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!("Budget report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}

/// Handle spending report
fn handle_spending_report(
    storage: &Storage,
    settings: &Settings,
    top: Option<usize>,
    output: Option<PathBuf>,
) -> SpendguardResult<()> {
    let mut report = SpendingReport::generate(storage.expenses());
    if let Some(limit) = top {
        report = report.truncated(limit);
    }

    if let Some(path) = output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!("Spending report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}

/// Handle expense register report
fn handle_expense_report(
    storage: &Storage,
    settings: &Settings,
    category: Option<String>,
    from: Option<String>,
    to: Option<String>,
    output: Option<PathBuf>,
) -> SpendguardResult<()> {
    if let Some(ref name) = category {
        let known = storage.expenses().iter().any(|e| e.category == *name)
            || storage.budgets().iter().any(|b| b.category == *name);
        if !known {
            return Err(SpendguardError::category_not_found(name.clone()));
        }
    }

    let filter = RegisterFilter {
        start_date: from.as_deref().map(|s| parse_date(s, "start")).transpose()?,
        end_date: to.as_deref().map(|s| parse_date(s, "end")).transpose()?,
        category,
    };

    let report = ExpenseRegisterReport::generate(storage.expenses(), filter);

    if let Some(path) = output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!(
            "Exported {} expenses to: {}",
            report.entries.len(),
            path.display()
        );
    } else {
        println!(
            "{}",
            report.format_terminal(&settings.currency_symbol, &settings.date_format)
        );
    }

    Ok(())
}

fn parse_date(s: &str, which: &str) -> SpendguardResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        SpendguardError::Validation(format!(
            "Invalid {} date format: {}. Use YYYY-MM-DD",
            which, s
        ))
    })
}

pub(crate) fn create_output(path: &Path) -> SpendguardResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        SpendguardError::Export(format!(
            "Failed to create file {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}
