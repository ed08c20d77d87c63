//! GitHub Actions integration: step outputs and workflow commands.

use crate::types::{EventLevel, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Whether the process runs inside a GitHub Actions job.
pub fn is_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Append `name=value` to the step output file, or print it when there is none.
pub fn write_output(path: Option<&Path>, name: &str, value: &str) -> Result<()> {
    let line = format!("{}={}", name, value);

    match path {
        Some(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}", line)?;
        }
        None => println!("{}", line),
    }

    Ok(())
}

/// Format an event as a workflow command line.
///
/// Info events have no command and are printed as plain text, unescaped.
pub fn workflow_command(level: EventLevel, message: &str) -> String {
    match level {
        EventLevel::Debug => format!("::debug::{}", escape_data(message)),
        EventLevel::Info => message.to_string(),
        EventLevel::Error => format!("::error::{}", escape_data(message)),
    }
}

fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
