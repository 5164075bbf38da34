//! HTTP client for the prediction backend's availability endpoint

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::models::AvailabilityResponse;

/// Endpoint path, relative to the configured base URL.
const AVAILABILITY_PATH: &str = "/predict/availability";

/// Default for `trigger_consensus`: asking about availability also kicks
/// off consensus generation upstream.
const DEFAULT_TRIGGER: bool = true;

/// Default consensus staleness tolerance (one week).
const DEFAULT_STALENESS_HOURS: u32 = 168;

/// Availability client errors
#[derive(Debug, Error)]
pub enum AvailabilityError {
    /// Non-2xx reply from the backend; carries the raw body text.
    #[error("availability request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Connect, DNS or timeout failure from the transport.
    #[error("availability request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx reply whose body does not match the declared response shape.
    #[error("malformed availability response: {source}")]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
    },
}

/// Required environment variable is absent.
#[derive(Debug, Error)]
#[error("missing required environment variable {0}")]
pub struct MissingConfig(pub &'static str);

/// Backend connection settings
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the prediction backend, without trailing slash.
    pub base_url: String,
    /// Bearer token for the backend.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: 30,
        }
    }

    /// Read `BACKEND_URL` and `BACKEND_API_KEY` from the environment.
    pub fn from_env() -> Result<Self, MissingConfig> {
        let base_url = std::env::var("BACKEND_URL").map_err(|_| MissingConfig("BACKEND_URL"))?;
        let api_key =
            std::env::var("BACKEND_API_KEY").map_err(|_| MissingConfig("BACKEND_API_KEY"))?;
        Ok(Self::new(base_url, api_key))
    }
}

#[derive(Serialize)]
struct AvailabilityRequest<'a> {
    match_ids: &'a [u32],
    trigger_consensus: bool,
    staleness_hours: u32,
}

/// Client for the availability endpoint.
///
/// Stateless beyond its configuration; construct one per process and pass
/// it to callers (tests substitute one pointed at a local server). Does
/// not retry: a failed call surfaces to the caller, who owns backoff
/// policy. Note that `trigger_consensus: true` starts work upstream, so
/// retrying after a timeout is wasteful but not unsafe.
pub struct AvailabilityClient {
    client: reqwest::Client,
    config: BackendConfig,
}

impl AvailabilityClient {
    /// Create a new client with the given configuration
    pub fn new(config: BackendConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetch availability for a batch of matches with default settings
    /// (trigger consensus, one-week staleness tolerance).
    pub async fn fetch_availability(
        &self,
        match_ids: &[u32],
    ) -> Result<AvailabilityResponse, AvailabilityError> {
        self.fetch_availability_with(match_ids, DEFAULT_TRIGGER, DEFAULT_STALENESS_HOURS)
            .await
    }

    /// Fetch availability with explicit trigger and staleness settings.
    ///
    /// Issues exactly one POST; a non-2xx reply becomes
    /// [`AvailabilityError::Upstream`] with the status and raw body, a 2xx
    /// reply that does not decode becomes
    /// [`AvailabilityError::MalformedResponse`].
    pub async fn fetch_availability_with(
        &self,
        match_ids: &[u32],
        trigger_consensus: bool,
        staleness_hours: u32,
    ) -> Result<AvailabilityResponse, AvailabilityError> {
        let url = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            AVAILABILITY_PATH
        );
        tracing::debug!("Fetching availability for {} matches", match_ids.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&AvailabilityRequest {
                match_ids,
                trigger_consensus,
                staleness_hours,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("Availability request failed with status {}", status);
            return Err(AvailabilityError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| AvailabilityError::MalformedResponse { source })
    }
}
