use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use spendguard::cli::{
    handle_alerts_command, handle_check_command, handle_export_command, handle_report_command,
    handle_summary_command, ExportCommands, ReportCommands,
};
use spendguard::config::{paths::SpendguardPaths, settings::Settings};
use spendguard::models::{Month, UserId};
use spendguard::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendguard",
    author = "Kaylee Beyene",
    version,
    about = "Expense totals, budget usage and spending alerts",
    long_about = "spendguard reads exported expense and budget records, totals \
                  spending per category, compares it against your budgets and \
                  tells you where you are close to or over the limit."
)]
struct Cli {
    /// Expense file to read instead of the data directory (JSON, or CSV by extension)
    #[arg(long, global = true, env = "SPENDGUARD_EXPENSES")]
    expenses: Option<PathBuf>,

    /// Budget file to read instead of the data directory
    #[arg(long, global = true, env = "SPENDGUARD_BUDGETS")]
    budgets: Option<PathBuf>,

    /// Only consider records belonging to this user
    #[arg(long, global = true)]
    user: Option<UserId>,

    /// Only consider expenses dated in this month (YYYY-MM)
    #[arg(long, global = true)]
    month: Option<Month>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show spending alerts
    Alerts {
        /// Print the alerts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the dashboard summary
    #[command(alias = "dashboard")]
    Summary,

    /// Reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export records and alerts
    #[command(subcommand)]
    Export(ExportCommands),

    /// Check records for problems
    Check,

    /// Create the data directory and empty record files
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let paths = SpendguardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("spendguard - expense totals and budget alerts");
            println!();
            println!("Run 'spendguard --help' for usage information.");
            println!("Run 'spendguard alerts' to see where your spending stands.");
            return Ok(());
        }
    };

    match command {
        Commands::Init => {
            println!("Initializing spendguard at: {}", paths.base_dir().display());
            spendguard::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Put your exported records in:");
            println!("  {}", paths.expenses_file().display());
            println!("  {}", paths.budgets_file().display());
            return Ok(());
        }
        Commands::Config => {
            println!("spendguard Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Budgets file:   {}", paths.budgets_file().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Recent expenses:  {}", settings.recent_expense_count);
            match settings.default_user {
                Some(user) => println!("  Default user:     {}", user.as_uuid()),
                None => println!("  Default user:     (all users)"),
            }
            return Ok(());
        }
        _ => {}
    }

    let mut storage = Storage::load_from(&paths, cli.expenses.as_deref(), cli.budgets.as_deref())?;
    if let Some(user) = cli.user.or(settings.default_user) {
        storage = storage.for_user(user);
    }
    if let Some(month) = cli.month {
        storage = storage.in_month(month);
    }

    match command {
        Commands::Alerts { json } => handle_alerts_command(&storage, json)?,
        Commands::Summary => handle_summary_command(&storage, &settings)?,
        Commands::Report(cmd) => handle_report_command(&storage, &settings, cmd)?,
        Commands::Export(cmd) => handle_export_command(&storage, cmd)?,
        Commands::Check => {
            let issues = handle_check_command(&storage)?;
            if issues > 0 {
                std::process::exit(1);
            }
        }
        Commands::Init | Commands::Config => {}
    }

    Ok(())
}
