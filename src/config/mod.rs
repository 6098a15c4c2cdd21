//! Configuration module for spendguard
//!
//! This module provides configuration management including:
//! - Platform path resolution with an environment override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendguardPaths;
pub use settings::Settings;
