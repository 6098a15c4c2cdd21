//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report and export layers.

pub mod alerts;
pub mod check;
pub mod export;
pub mod report;

pub use alerts::{handle_alerts_command, handle_summary_command};
pub use check::handle_check_command;
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use report::{handle_report_command, ReportCommands};
