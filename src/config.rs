//! Command-line and environment configuration.
//!
//! Every input can also come from the `INPUT_*` variables GitHub Actions sets
//! for an action's `with:` block.

use crate::checker::{CheckRequest, CheckSettings};
use crate::types::HttpConfig;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Wait until a published NuGet package version is indexed.
#[derive(Parser, Debug, Clone)]
#[command(name = "nuget-index-check")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Package identifier to look for
    #[arg(long, env = "INPUT_PACKAGE")]
    pub package: String,

    /// Package version to look for
    #[arg(long = "package-version", env = "INPUT_VERSION")]
    pub package_version: String,

    /// Maximum number of checks (default: 1)
    #[arg(long, env = "INPUT_ATTEMPTS")]
    pub attempts: Option<String>,

    /// Delay between checks in milliseconds
    #[arg(long, env = "INPUT_DELAY", default_value = "30000")]
    pub delay_ms: u64,

    /// Registry base URL
    #[arg(long, env = "INPUT_REGISTRY", default_value = crate::registry::DEFAULT_REGISTRY_URL)]
    pub registry: Url,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Custom User-Agent string
    #[arg(long)]
    pub user_agent: Option<String>,

    /// File the `indexed` output is appended to (defaults to stdout)
    #[arg(short, long, env = "GITHUB_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Raw inputs for the checker.
    pub fn request(&self) -> CheckRequest {
        CheckRequest {
            package: self.package.clone(),
            version: self.package_version.clone(),
            attempts: self.attempts.clone(),
        }
    }

    /// Settings for the checker.
    pub fn settings(&self) -> CheckSettings {
        let defaults = HttpConfig::default();
        CheckSettings {
            registry_url: self.registry.as_str().trim_end_matches('/').to_string(),
            delay: Duration::from_millis(self.delay_ms),
            http: HttpConfig {
                timeout_secs: self.timeout,
                user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            },
        }
    }
}
