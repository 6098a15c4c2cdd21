//! Service layer for spendguard
//!
//! The alert engine lives here: aggregation, budget lookup, ratio
//! classification and alert generation. Every function is a pure function
//! of its inputs; nothing is cached or held between calls. Record
//! validation sits alongside for the `check` command.

pub mod aggregation;
pub mod alerts;
pub mod budget_index;
pub mod classifier;
pub mod validation;

pub use aggregation::{aggregate, Aggregation, CategoryTotal, CategoryTotals};
pub use alerts::{generate_alerts, SpendingAnalysis};
pub use budget_index::{lookup_budget, total_budget};
pub use classifier::{classify, usage_ratio, Classification, Tier};
pub use validation::{validate_records, IssueKind, RecordRef, ValidationIssue};
