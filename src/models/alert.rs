//! Alert model
//!
//! Alerts are derived output of the alert engine and are never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgent an alert is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "Warning"),
            Self::Danger => write!(f, "Danger"),
        }
    }
}

/// A spending alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: Severity,
    pub message: String,
    /// Present for category alerts, absent for the overall-budget alert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Alert {
    /// An alert about the overall budget
    pub fn overall(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            category: None,
        }
    }

    /// An alert about a single category
    pub fn for_category(
        severity: Severity,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            category: Some(category.into()),
        }
    }

    pub fn is_danger(&self) -> bool {
        self.severity == Severity::Danger
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_alert_has_no_category() {
        let alert = Alert::overall(Severity::Danger, "Overall");
        assert!(alert.category.is_none());
        assert!(alert.is_danger());

        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["severity"], "danger");
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_category_alert() {
        let alert = Alert::for_category(Severity::Warning, "Food", "Food expenses");
        assert_eq!(alert.category.as_deref(), Some("Food"));
        assert_eq!(alert.to_string(), "[Warning] Food expenses");
    }
}
