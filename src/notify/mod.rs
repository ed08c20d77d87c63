//! Reporting of check results.
//!
//! This module handles:
//! - Colored console output and JSON reports
//! - GitHub Actions step outputs and workflow commands

pub mod console;
pub mod github;

pub use console::ConsoleOutput;
