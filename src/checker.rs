//! Validates a request and polls the registry, producing a report.

use crate::registry::{NuGetProbe, PollLoop, ResourceProbe, Sleeper, TokioSleeper};
use crate::types::{
    CheckOutcome, CheckReport, EventLog, HttpConfig, Result, ValidationError,
};
use crate::validation::{is_valid_package_name, is_valid_package_version, parse_attempt_budget};
use std::time::Duration;

/// Raw inputs for one check, as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckRequest {
    pub package: String,
    pub version: String,
    /// Attempt count as text; missing or blank means one attempt.
    pub attempts: Option<String>,
}

/// Settings that do not change between checks.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    pub registry_url: String,
    pub delay: Duration,
    pub http: HttpConfig,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            registry_url: crate::registry::DEFAULT_REGISTRY_URL.to_string(),
            delay: crate::registry::DEFAULT_DELAY,
            http: HttpConfig::default(),
        }
    }
}

/// Runs validation and polling for a request.
pub struct IndexChecker<P, S> {
    poller: PollLoop<P, S>,
}

impl IndexChecker<NuGetProbe, TokioSleeper> {
    /// Create a checker that talks to the registry over HTTP.
    pub fn new(settings: &CheckSettings) -> Result<Self> {
        let probe = NuGetProbe::new(&settings.http)?;
        let poller =
            PollLoop::new(probe, TokioSleeper, &settings.registry_url).with_delay(settings.delay);
        Ok(Self { poller })
    }
}

impl<P: ResourceProbe, S: Sleeper> IndexChecker<P, S> {
    /// Create a checker around an existing poll loop.
    pub fn with_poller(poller: PollLoop<P, S>) -> Self {
        Self { poller }
    }

    /// Check a request. Never fails: every failure is captured in the report.
    pub async fn check(&self, request: &CheckRequest) -> CheckReport {
        let mut events = EventLog::new();
        events.debug("Starting NuGet package index check...");

        let outcome = self.run(request, &mut events).await;

        events.debug("NuGet package index check finished.");

        CheckReport {
            package: request.package.clone(),
            version: request.version.clone(),
            outcome,
            events: events.into_events(),
        }
    }

    async fn run(&self, request: &CheckRequest, events: &mut EventLog) -> CheckOutcome {
        let attempts = parse_attempt_budget(request.attempts.as_deref());

        events.debug(format!("Package Name: {}", request.package));
        events.debug(format!("Package Version: {}", request.version));
        match &attempts {
            Ok(n) => events.debug(format!("Attempts: {}", n)),
            Err(e) => events.debug(format!("Attempts: {}", e.value())),
        }

        let max_attempts = match validate(request, attempts) {
            Ok(n) => n,
            Err(e) => {
                events.error(e.detail());
                return CheckOutcome::InvalidInput {
                    field: e.field().to_string(),
                    value: e.value().to_string(),
                    message: e.to_string(),
                };
            }
        };

        match self
            .poller
            .poll(&request.package, &request.version, max_attempts, events)
            .await
        {
            Ok(indexed) => {
                events.info(format!("Package indexed status: {}", indexed));
                if indexed {
                    CheckOutcome::Indexed
                } else {
                    CheckOutcome::NotIndexed {
                        attempts: max_attempts,
                    }
                }
            }
            Err(e) => {
                events.error(format!("Error during package check: {}", e));
                CheckOutcome::ProbeFailed {
                    message: e.to_string(),
                }
            }
        }
    }
}

/// Check name, version and attempts in that order.
fn validate(
    request: &CheckRequest,
    attempts: std::result::Result<u32, ValidationError>,
) -> std::result::Result<u32, ValidationError> {
    if !is_valid_package_name(&request.package) {
        return Err(ValidationError::PackageName(request.package.clone()));
    }
    if !is_valid_package_version(&request.version) {
        return Err(ValidationError::Version(request.version.clone()));
    }
    attempts
}
