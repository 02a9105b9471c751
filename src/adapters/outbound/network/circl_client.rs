use super::retry::{retry_with_backoff, RetryPolicy};
use crate::enrichment::domain::{CveId, LookupDocument};
use crate::ports::outbound::CveRepository;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;

/// Connection settings for [`CirclClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupClientSettings {
    /// Base URL of the lookup service; `/api/cve/{id}` is appended
    pub api_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    pub retry_policy: RetryPolicy,
}

impl Default for LookupClientSettings {
    fn default() -> Self {
        Self {
            api_url: CirclClient::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(CirclClient::TIMEOUT_SECONDS),
            retry_policy: RetryPolicy::default(),
        }
    }
}

/// CVE lookup client for the CIRCL vulnerability-lookup API
///
/// Issues one `GET {api_url}/api/cve/{id}` per call.
///
/// # Resilience
/// - Timeout per request (10 seconds by default)
/// - Up to 3 attempts with exponential backoff (4s, then 8s, capped at 10s)
/// - Retries only connection errors, timeouts and non-2xx responses; a
///   2xx response with an empty or non-JSON body is returned as an empty
///   document and is not retried
pub struct CirclClient {
    client: Client,
    api_url: String,
    retry_policy: RetryPolicy,
}

impl CirclClient {
    pub const DEFAULT_API_URL: &'static str = "https://cve.circl.lu";
    pub const TIMEOUT_SECONDS: u64 = 10;

    /// Creates a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_settings(LookupClientSettings::default())
    }

    pub fn with_settings(settings: LookupClientSettings) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("cve-info-fetcher/{}", version);
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            retry_policy: settings.retry_policy,
        })
    }

    /// Builds the lookup URL for a CVE ID
    fn endpoint(&self, cve_id: &CveId) -> String {
        format!(
            "{}/api/cve/{}",
            self.api_url,
            urlencoding::encode(cve_id.as_str())
        )
    }

    /// Performs a single request without retry
    fn request_once(&self, url: &str) -> Result<LookupDocument> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("lookup service returned status code {}", status);
        }

        let body = response.text()?;
        Ok(LookupDocument::from_body(&body))
    }
}

impl CveRepository for CirclClient {
    fn fetch_cve(&self, cve_id: &CveId) -> Result<LookupDocument> {
        let url = self.endpoint(cve_id);

        retry_with_backoff(&self.retry_policy, "CVE lookup request", |attempt| {
            tracing::debug!(cve_id = %cve_id, attempt, url = %url, "requesting CVE record");
            self.request_once(&url)
        })
    }
}
