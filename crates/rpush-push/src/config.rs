use std::time::Duration;

use reqwest::Url;

use crate::errors::PushError;

/// Upper bound for the whole request, connect included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct PushConfig {
    /// Full push URL, e.g. `http://pushgateway:9091/metrics/job/restic/instance/host01`.
    pub endpoint: Url,
    /// Accept any server certificate, whatever its chain or hostname.
    pub skip_tls_verify: bool,
    pub timeout: Duration,
}

impl PushConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            skip_tls_verify: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_skip_tls_verify(mut self, skip: bool) -> Self {
        self.skip_tls_verify = skip;
        self
    }
}

/// Parse a push URL, accepting only `http` and `https`.
pub fn parse_endpoint(s: &str) -> Result<Url, PushError> {
    let url = Url::parse(s).map_err(|e| PushError::InvalidEndpoint(format!("{s}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(PushError::InvalidEndpoint(format!(
            "{s}: unsupported scheme {other}"
        ))),
    }
}
