use std::error::Error as StdError;

use reqwest::{StatusCode, header::CONTENT_TYPE};
use tracing::debug;

use crate::config::PushConfig;
use crate::errors::PushError;

/// Status line of an accepted push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushResponse {
    pub code: u16,
    pub reason: String,
}

impl PushResponse {
    fn from_status(status: StatusCode) -> Self {
        Self {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

/// One-shot HTTP publisher for a rendered exposition.
pub struct Pusher {
    client: reqwest::Client,
    cfg: PushConfig,
}

impl Pusher {
    pub fn new(cfg: PushConfig) -> Result<Self, PushError> {
        let client = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .danger_accept_invalid_certs(cfg.skip_tls_verify)
            .build()
            .map_err(|e| PushError::Client(root_cause(&e)))?;
        Ok(Self { client, cfg })
    }

    /// POST `body` to the endpoint.
    ///
    /// Any 4xx/5xx answer is returned as [`PushError::Status`]; every other status counts as accepted.
    pub async fn push(&self, body: String) -> Result<PushResponse, PushError> {
        debug!(
            endpoint = %self.cfg.endpoint,
            bytes = body.len(),
            skip_tls_verify = self.cfg.skip_tls_verify,
            "pushing metrics"
        );

        let response = self
            .client
            .post(self.cfg.endpoint.clone())
            .header(CONTENT_TYPE, rpush_prometheus::CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let rejected = PushResponse::from_status(status);
            return Err(PushError::Status {
                code: rejected.code,
                reason: rejected.reason,
            });
        }
        Ok(PushResponse::from_status(status))
    }
}

fn classify(e: reqwest::Error) -> PushError {
    if e.is_timeout() {
        PushError::Timeout
    } else {
        PushError::Transport(root_cause(&e))
    }
}

/// Message of the innermost error in the source chain.
fn root_cause(e: &(dyn StdError + 'static)) -> String {
    let mut cur = e;
    while let Some(next) = cur.source() {
        cur = next;
    }
    cur.to_string()
}
