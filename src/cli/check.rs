//! CLI command for record validation

use crate::error::SpendguardResult;
use crate::storage::Storage;

/// Print validation issues and return how many were found
pub fn handle_check_command(storage: &Storage) -> SpendguardResult<usize> {
    let issues = storage.validate();

    if issues.is_empty() {
        println!(
            "No issues found in {} expenses and {} budgets.",
            storage.expenses().len(),
            storage.budgets().len()
        );
    } else {
        for issue in &issues {
            println!("{}", issue);
        }
        println!();
        println!("{} issue(s) found.", issues.len());
    }

    Ok(issues.len())
}
