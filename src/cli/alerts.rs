//! CLI commands for alerts and the dashboard summary

use crate::config::settings::Settings;
use crate::display::format_alert_list;
use crate::error::SpendguardResult;
use crate::reports::DashboardSummary;
use crate::services::generate_alerts;
use crate::storage::Storage;

/// Print the ordered alert list, as text or as a JSON array
pub fn handle_alerts_command(storage: &Storage, json: bool) -> SpendguardResult<()> {
    let alerts = generate_alerts(storage.expenses(), storage.budgets());

    if json {
        println!("{}", serde_json::to_string_pretty(&alerts)?);
    } else {
        print!("{}", format_alert_list(&alerts));
        if alerts.is_empty() {
            println!();
        }
    }

    Ok(())
}

/// Print the dashboard summary
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> SpendguardResult<()> {
    let summary = DashboardSummary::generate(
        storage.expenses(),
        storage.budgets(),
        settings.recent_expense_count,
    );
    print!(
        "{}",
        summary.format_terminal(&settings.currency_symbol, &settings.date_format)
    );
    if summary.alerts.is_empty() {
        println!();
    }

    Ok(())
}
