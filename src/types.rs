//! Core types and errors for the index checker.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while checking a package.
#[derive(Error, Debug)]
pub enum IndexCheckError {
    /// The registry could not be reached at all.
    #[error("Network error or no response received")]
    Network,

    /// The registry answered, but not with found or absent. `status` is
    /// `None` when no final status was reached (redirect loop).
    #[error("HTTP error: {message}")]
    Http { status: Option<u16>, message: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IndexCheckError>;

/// Rejected invocation input. The display text is the user-facing failure message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid package name.")]
    PackageName(String),

    #[error("Invalid package version. Expected format: x.y.z or x.y.z-label.")]
    Version(String),

    #[error("Invalid number of attempts. Must be a positive integer.")]
    Attempts(String),
}

impl ValidationError {
    /// Name of the rejected input.
    pub fn field(&self) -> &'static str {
        match self {
            Self::PackageName(_) => "package",
            Self::Version(_) => "version",
            Self::Attempts(_) => "attempts",
        }
    }

    /// The rejected value as supplied.
    pub fn value(&self) -> &str {
        match self {
            Self::PackageName(v) | Self::Version(v) | Self::Attempts(v) => v,
        }
    }

    /// Detail line logged before the failure is reported.
    pub fn detail(&self) -> String {
        let what = match self {
            Self::PackageName(_) => "package name",
            Self::Version(_) => "package version",
            Self::Attempts(_) => "number of attempts",
        };
        format!("Validation Error: Invalid {}: {}", what, self.value())
    }
}

/// Result of a single registry probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The package version is served by the registry.
    Found,
    /// The registry does not serve it yet.
    NotFound,
}

/// Severity of a recorded event.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventLevel {
    Debug,
    Info,
    Error,
}

/// A message produced while checking a package.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LogEvent {
    pub level: EventLevel,
    pub message: String,
}

/// Ordered collection of events for one check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<LogEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: EventLevel, message: impl Into<String>) {
        self.events.push(LogEvent {
            level,
            message: message.into(),
        });
    }

    pub fn debug(&mut self, message: impl Into<String>) {
        self.push(EventLevel::Debug, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(EventLevel::Info, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(EventLevel::Error, message);
    }

    pub fn events(&self) -> &[LogEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<LogEvent> {
        self.events
    }
}

/// Final state of a check.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The package version was found.
    Indexed,
    /// Every attempt came back absent.
    NotIndexed { attempts: u32 },
    /// An input was rejected before any request was made.
    InvalidInput {
        field: String,
        value: String,
        message: String,
    },
    /// A probe failed and the poll was aborted.
    ProbeFailed { message: String },
}

/// Everything the caller needs to report a finished check.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckReport {
    pub package: String,
    pub version: String,
    pub outcome: CheckOutcome,
    pub events: Vec<LogEvent>,
}

impl CheckReport {
    /// Value of the `indexed` output, `None` when the poll never ran.
    pub fn indexed(&self) -> Option<bool> {
        match self.outcome {
            CheckOutcome::Indexed => Some(true),
            CheckOutcome::NotIndexed { .. } | CheckOutcome::ProbeFailed { .. } => Some(false),
            CheckOutcome::InvalidInput { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Indexed)
    }

    /// Message the invocation fails with, if it fails.
    pub fn failure_message(&self) -> Option<String> {
        match &self.outcome {
            CheckOutcome::Indexed => None,
            CheckOutcome::NotIndexed { .. } => Some(format!(
                "Package {} version {} is not indexed.",
                self.package, self.version
            )),
            CheckOutcome::InvalidInput { message, .. } => Some(message.clone()),
            CheckOutcome::ProbeFailed { message } => Some(message.clone()),
        }
    }
}

/// Configuration for HTTP requests.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("nuget-index-check/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
