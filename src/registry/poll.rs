//! Fixed-interval polling until a package version shows up.

use crate::registry::probe::{package_url, ResourceProbe};
use crate::types::{EventLog, ProbeOutcome, Result};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Default wait between attempts.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(30_000);

/// Non-blocking wait between attempts.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Repeats a probe on a fixed schedule until the package is found or the
/// attempt budget runs out.
pub struct PollLoop<P, S> {
    probe: P,
    sleeper: S,
    registry_url: String,
    registry_host: String,
    delay: Duration,
}

impl<P: ResourceProbe, S: Sleeper> PollLoop<P, S> {
    pub fn new(probe: P, sleeper: S, registry_url: &str) -> Self {
        let registry_host = url::Url::parse(registry_url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string()))
            .unwrap_or_else(|| registry_url.to_string());

        Self {
            probe,
            sleeper,
            registry_url: registry_url.to_string(),
            registry_host,
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[cfg(test)]
    pub(crate) fn probe(&self) -> &P {
        &self.probe
    }

    #[cfg(test)]
    pub(crate) fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Poll until `package` at `version` is served, at most `max_attempts` times.
    ///
    /// Returns `Ok(false)` when every attempt came back absent. A probe error
    /// ends the loop at once and is returned as is.
    pub async fn poll(
        &self,
        package: &str,
        version: &str,
        max_attempts: u32,
        events: &mut EventLog,
    ) -> Result<bool> {
        let url = package_url(&self.registry_url, package, version);
        debug!("Polling {} up to {} times", url, max_attempts);

        for attempt in 1..=max_attempts {
            if self.probe.probe(&url).await? == ProbeOutcome::Found {
                events.info(format!(
                    "Package {} version {} is indexed on {}.",
                    package, version, self.registry_host
                ));
                return Ok(true);
            }

            if attempt < max_attempts {
                events.info(format!(
                    "Attempt {} of {}: Package not indexed yet. Retrying in {} seconds...",
                    attempt,
                    max_attempts,
                    self.delay.as_secs_f64()
                ));
                self.sleeper.sleep(self.delay).await;
            }
        }

        events.info(format!(
            "Package {} version {} is not indexed on {} after {} attempt(s).",
            package, version, self.registry_host, max_attempts
        ));
        Ok(false)
    }
}
