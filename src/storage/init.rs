//! Storage initialization
//!
//! Creates the directory tree and empty record files on first run.

use crate::config::paths::SpendguardPaths;
use crate::error::SpendguardError;
use crate::models::{Budget, Expense};

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Existing record files are left untouched.
pub fn initialize_storage(paths: &SpendguardPaths) -> Result<(), SpendguardError> {
    paths.ensure_directories()?;

    if !paths.expenses_file().exists() {
        write_json_atomic(paths.expenses_file(), &Vec::<Expense>::new())?;
        log::info!("created {}", paths.expenses_file().display());
    }

    if !paths.budgets_file().exists() {
        write_json_atomic(paths.budgets_file(), &Vec::<Budget>::new())?;
        log::info!("created {}", paths.budgets_file().display());
    }

    Ok(())
}
