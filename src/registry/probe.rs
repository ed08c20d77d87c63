//! Single existence check against the registry's package download URL.

use crate::types::{HttpConfig, IndexCheckError, ProbeOutcome, Result};
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace};

/// Default registry host.
pub const DEFAULT_REGISTRY_URL: &str = "https://www.nuget.org";

/// Path under the registry host that serves package downloads.
const PACKAGE_PATH: &str = "api/v2/package";

/// Build the download URL for `package` at `version`.
pub fn package_url(registry: &str, package: &str, version: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        registry.trim_end_matches('/'),
        PACKAGE_PATH,
        package,
        version
    )
}

/// One network existence check.
///
/// `Ok(NotFound)` is an expected answer; `Err` means the registry could not
/// give one.
pub trait ResourceProbe: Send + Sync {
    fn probe(&self, url: &str) -> impl Future<Output = Result<ProbeOutcome>> + Send;
}

/// Map a response status onto a probe outcome.
pub fn classify_status(status: StatusCode) -> Result<ProbeOutcome> {
    match status {
        StatusCode::OK => Ok(ProbeOutcome::Found),
        StatusCode::NOT_FOUND => Ok(ProbeOutcome::NotFound),
        s if s.is_success() => Ok(ProbeOutcome::NotFound),
        s => Err(IndexCheckError::Http {
            status: Some(s.as_u16()),
            message: s.to_string(),
        }),
    }
}

/// Redirects followed before a request fails.
const MAX_REDIRECTS: usize = 5;

/// Probe backed by a reqwest client.
#[derive(Clone)]
pub struct NuGetProbe {
    client: Client,
}

impl NuGetProbe {
    /// Create a probe with its own HTTP client.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .http1_only()
            .pool_max_idle_per_host(2)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client })
    }

    /// Create a probe around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl ResourceProbe for NuGetProbe {
    async fn probe(&self, url: &str) -> Result<ProbeOutcome> {
        trace!("Probing: {}", url);

        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) if e.is_redirect() => {
                debug!("Redirect limit hit for {}: {}", url, e);
                return Err(IndexCheckError::Http {
                    status: e.status().map(|s| s.as_u16()),
                    message: "too many redirects".to_string(),
                });
            }
            Err(e) => {
                debug!("No response from {}: {}", url, e);
                return Err(IndexCheckError::Network);
            }
        };

        let status = response.status();
        debug!("{} -> {}", url, status);
        classify_status(status)
    }
}
