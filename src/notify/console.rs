//! Console rendering of check reports.

use crate::notify::github::workflow_command;
use crate::types::{CheckOutcome, CheckReport, EventLevel, LogEvent};
use colored::Colorize;
use tracing::{debug, error, info};

/// Console output handler with colors and formatting.
pub struct ConsoleOutput {
    json_mode: bool,
    github: bool,
}

impl ConsoleOutput {
    /// Create a new console output handler.
    pub fn new(json_mode: bool, github: bool) -> Self {
        Self { json_mode, github }
    }

    /// Emit the events recorded during a check.
    pub fn print_events(&self, report: &CheckReport) {
        for event in &report.events {
            self.print_event(event);
        }
    }

    fn print_event(&self, event: &LogEvent) {
        if self.github {
            // Workflow commands go to stdout; keep JSON output clean.
            if !self.json_mode {
                println!("{}", workflow_command(event.level, &event.message));
            }
            return;
        }

        match event.level {
            EventLevel::Debug => debug!("{}", event.message),
            EventLevel::Info => info!("{}", event.message),
            EventLevel::Error => error!("{}", event.message),
        }
    }

    /// Print the final result.
    pub fn print_summary(&self, report: &CheckReport) {
        if self.json_mode {
            if let Ok(json) = serde_json::to_string_pretty(report) {
                println!("{}", json);
            }
            return;
        }

        if self.github {
            if let Some(message) = report.failure_message() {
                println!("{}", workflow_command(EventLevel::Error, &message));
            }
            return;
        }

        eprintln!("{}", format_summary(report));
    }
}

/// One-line colored summary of a report.
fn format_summary(report: &CheckReport) -> String {
    let target = format!("{} {}", report.package, report.version);
    match &report.outcome {
        CheckOutcome::Indexed => format!("{} {} is indexed", "[+]".green(), target.bright_white()),
        CheckOutcome::NotIndexed { attempts } => format!(
            "{} {} is not indexed after {} attempt(s)",
            "[-]".red(),
            target.bright_white(),
            attempts
        ),
        CheckOutcome::InvalidInput { message, .. } => {
            format!("{} {}", "[!]".yellow(), message)
        }
        CheckOutcome::ProbeFailed { message } => format!(
            "{} {}: {}",
            "[!]".red().bold(),
            target.bright_white(),
            message
        ),
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new(false, false)
    }
}
