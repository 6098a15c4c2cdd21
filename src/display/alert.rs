//! Alert display formatting

use crate::models::{Alert, Severity};

/// Shown when there is nothing to warn about
pub const NO_ALERTS: &str = "No alerts at this time. Your spending is within budget!";

/// Format alerts in order, category alerts headed by their category
pub fn format_alert_list(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return NO_ALERTS.to_string();
    }

    let mut output = String::new();
    for alert in alerts {
        let marker = match alert.severity {
            Severity::Danger => "[DANGER] ",
            Severity::Warning => "[WARNING]",
        };
        match &alert.category {
            Some(category) => {
                output.push_str(&format!("{} {}\n", marker, category));
                output.push_str(&format!("{:9} {}\n", "", alert.message));
            }
            None => output.push_str(&format!("{} {}\n", marker, alert.message)),
        }
    }

    output
}
