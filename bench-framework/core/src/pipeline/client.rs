use std::time::Duration;

use bench_framework_config::{pipeline_url, timeouts};
use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::{PipelineRequest, PipelineResponse};

#[derive(Debug, thiserror::Error)]
pub enum PipelineClientError {
    #[error("invalid pipeline url '{value}': {message}")]
    InvalidUrl { value: String, message: String },
    #[error("failed to build pipeline http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("pipeline request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("pipeline response body could not be read: {0}")]
    Body(#[source] reqwest::Error),
}

/// Where the pipeline lives and how long to wait for it.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub url: Url,
    /// Bounds the whole exchange, including the pipeline's own run time.
    pub request_timeout: Duration,
    /// Bounds only connection setup, so a dead service fails fast while a
    /// slow one is still waited for.
    pub connect_timeout: Duration,
}

impl PipelineConfig {
    /// Builds a config for `url` with the default timeouts.
    pub fn new(url: &str) -> Result<Self, PipelineClientError> {
        let url = Url::parse(url).map_err(|err| PipelineClientError::InvalidUrl {
            value: url.to_owned(),
            message: err.to_string(),
        })?;
        Ok(Self {
            url,
            request_timeout: timeouts::pipeline_request_timeout(),
            connect_timeout: timeouts::pipeline_connect_timeout(),
        })
    }

    /// Reads `LEDGER_BENCH_PIPELINE_*` overrides on top of the defaults.
    pub fn from_env() -> Result<Self, PipelineClientError> {
        Self::new(&pipeline_url())
    }
}

/// Thin async client for the pipeline's single endpoint.
#[derive(Clone, Debug)]
pub struct PipelineClient {
    url: Url,
    client: Client,
}

impl PipelineClient {
    pub fn new(config: &PipelineConfig) -> Result<Self, PipelineClientError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(PipelineClientError::Client)?;
        Ok(Self {
            url: config.url.clone(),
            client,
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Runs the benchmark matrix remotely and returns its decoded answer.
    ///
    /// Transport failures are errors. A body that is not JSON is not: it
    /// comes back as [`PipelineResponse::parse_failure`]. The HTTP status is
    /// logged and otherwise ignored, since the service reports failures in
    /// the body.
    pub async fn execute(
        &self,
        request: &PipelineRequest,
    ) -> Result<PipelineResponse, PipelineClientError> {
        debug!(url = %self.url, ?request, "calling metrics pipeline");

        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .map_err(PipelineClientError::Request)?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, %status, "metrics pipeline answered with non-success status");
        }

        let body = response.bytes().await.map_err(PipelineClientError::Body)?;
        let decoded = PipelineResponse::from_body(&body);
        debug!(
            %status,
            body_len = body.len(),
            pipeline_status = decoded.status.as_deref(),
            has_metrics = decoded.metrics.is_some(),
            "metrics pipeline answered"
        );

        Ok(decoded)
    }
}
