//! User settings for spendguard
//!
//! Manages display preferences and the default user whose records are
//! loaded when no `--user` flag is given.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::SpendguardPaths;
use crate::error::SpendguardError;
use crate::models::UserId;

/// User settings for spendguard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol for terminal tables. Alert messages always use `₹`.
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many expenses the dashboard lists under "Recent Expenses"
    #[serde(default = "default_recent_expense_count")]
    pub recent_expense_count: usize,

    /// Only load rows belonging to this user when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<UserId>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_expense_count() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_expense_count: default_recent_expense_count(),
            default_user: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SpendguardPaths) -> Result<Self, SpendguardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SpendguardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendguardError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject settings that would fail later at display time
    pub fn validate(&self) -> Result<(), SpendguardError> {
        let bad_format = StrftimeItems::new(&self.date_format).any(|item| item == Item::Error);
        if bad_format {
            return Err(SpendguardError::Config(format!(
                "Invalid date format: {}",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendguardPaths) -> Result<(), SpendguardError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendguardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            SpendguardError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.recent_expense_count, 5);
        assert!(settings.default_user.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendguardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "Rs ".into();
        settings.recent_expense_count = 10;
        settings.default_user = Some(UserId::new());

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "Rs ");
        assert_eq!(loaded.recent_expense_count, 10);
        assert_eq!(loaded.default_user, settings.default_user);
    }

    #[test]
    fn test_missing_fields_default() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.recent_expense_count, 5);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendguardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SpendguardError::Config(_)));
    }

    #[test]
    fn test_invalid_date_format() {
        let mut settings = Settings::default();
        assert!(settings.validate().is_ok());

        settings.date_format = "%d/%m/%Y".into();
        assert!(settings.validate().is_ok());

        settings.date_format = "%Q".into();
        assert!(settings.validate().is_err());
    }
}
