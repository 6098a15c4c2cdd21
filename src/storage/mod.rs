//! Record loading for spendguard
//!
//! The hosted store is the source of truth; spendguard reads the user's
//! expense and budget rows from files exported from it (JSON arrays of rows,
//! or CSV for expenses) and hands them to the alert engine unchanged, in
//! file order.

pub mod file_io;
pub mod init;

pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use init::initialize_storage;

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::config::paths::SpendguardPaths;
use crate::error::SpendguardError;
use crate::models::{Budget, Expense, ExpenseId, Money, Month, UserId};
use crate::services::validate_records;

/// One expense row of a CSV export
#[derive(Debug, Deserialize)]
struct ExpenseCsvRow {
    #[serde(default)]
    id: Option<ExpenseId>,
    #[serde(default)]
    user_id: Option<UserId>,
    date: NaiveDate,
    #[serde(default)]
    description: String,
    category: String,
    amount: Money,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<ExpenseCsvRow> for Expense {
    fn from(row: ExpenseCsvRow) -> Self {
        Self {
            id: row.id.unwrap_or_default(),
            user_id: row.user_id,
            amount: row.amount,
            category: row.category,
            description: row.description,
            date: row.date,
            created_at: row.created_at,
        }
    }
}

/// The expense and budget lists for one analysis run
#[derive(Debug, Clone, Default)]
pub struct Storage {
    expenses: Vec<Expense>,
    budgets: Vec<Budget>,
}

impl Storage {
    /// Wrap already-loaded records
    pub fn new(expenses: Vec<Expense>, budgets: Vec<Budget>) -> Self {
        Self { expenses, budgets }
    }

    /// Load from the default data files; missing files load as empty lists
    pub fn load(paths: &SpendguardPaths) -> Result<Self, SpendguardError> {
        Self::load_from(paths, None, None)
    }

    /// Load records, preferring explicitly given files over the defaults
    ///
    /// An explicit path that does not exist is an error.
    pub fn load_from(
        paths: &SpendguardPaths,
        expenses_path: Option<&Path>,
        budgets_path: Option<&Path>,
    ) -> Result<Self, SpendguardError> {
        let expenses = match expenses_path {
            Some(path) => load_expenses(path)?,
            None => read_json(paths.expenses_file())?,
        };
        let budgets: Vec<Budget> = match budgets_path {
            Some(path) => read_json_required(path)?,
            None => read_json(paths.budgets_file())?,
        };

        log::info!("loaded {} expenses and {} budgets", expenses.len(), budgets.len());

        let storage = Self::new(expenses, budgets);
        for issue in storage.validate() {
            log::warn!("{}", issue);
        }
        Ok(storage)
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.budgets.is_empty()
    }

    /// Keep only rows belonging to `user_id`, preserving order
    pub fn for_user(mut self, user_id: UserId) -> Self {
        self.expenses.retain(|e| e.user_id == Some(user_id));
        self.budgets.retain(|b| b.user_id == Some(user_id));
        log::debug!(
            "user {}: {} expenses, {} budgets",
            user_id,
            self.expenses.len(),
            self.budgets.len()
        );
        self
    }

    /// Keep only expenses dated within `month`, preserving order
    pub fn in_month(mut self, month: Month) -> Self {
        self.expenses.retain(|e| month.contains(e.date));
        log::debug!("month {}: {} expenses", month, self.expenses.len());
        self
    }

    /// Validation issues for the loaded records
    pub fn validate(&self) -> Vec<crate::services::ValidationIssue> {
        validate_records(&self.expenses, &self.budgets)
    }
}

/// Load expenses from JSON, or from CSV when the file ends in `.csv`
pub fn load_expenses(path: &Path) -> Result<Vec<Expense>, SpendguardError> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        let rows: Vec<ExpenseCsvRow> = file_io::read_csv_required(path)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    } else {
        read_json_required(path)
    }
}
