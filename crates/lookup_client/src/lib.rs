use std::{sync::Arc, time::Duration};

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{LookupResult, VIDEO_ID_PARAM},
    protocol::LookupResponse,
};
use tracing::{debug, info};
use url::Url;

pub mod error;
mod stand_in;

pub use error::LookupError;
pub use stand_in::{
    StandInSource, FALLBACK_VIDEO_ID, INVALID_VIDEO_ID, INVALID_VIDEO_MESSAGE, SAMPLE_DESCRIPTION,
    SAMPLE_TITLE, STAND_IN_DELAY,
};

/// Anything that can turn a video id into display metadata.
///
/// An `Err` means the call itself failed (network, body decoding). A service
/// that answers but reports a problem yields `Ok(LookupResult::Failure { .. })`.
#[async_trait]
pub trait VideoSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch(&self, video_id: &str) -> Result<LookupResult>;
}

/// Which source to build and how.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub endpoint: Url,
    pub stand_in: bool,
    pub stand_in_delay: Duration,
    pub request_timeout: Option<Duration>,
}

pub fn source_for(config: &SourceConfig) -> Result<Arc<dyn VideoSource>, LookupError> {
    if config.stand_in {
        info!(
            delay_ms = config.stand_in_delay.as_millis() as u64,
            "stand-in mode: serving canned lookup data"
        );
        return Ok(Arc::new(StandInSource::with_delay(config.stand_in_delay)));
    }

    let remote = match config.request_timeout {
        Some(timeout) => RemoteLookup::with_timeout(config.endpoint.clone(), timeout)?,
        None => RemoteLookup::new(config.endpoint.clone()),
    };
    Ok(Arc::new(remote))
}

pub fn parse_endpoint(raw: &str) -> Result<Url, LookupError> {
    Url::parse(raw.trim()).map_err(|source| LookupError::InvalidEndpoint {
        endpoint: raw.to_string(),
        source,
    })
}

/// `GET <endpoint>?v=<id>` against the lookup service.
pub struct RemoteLookup {
    http: Client,
    endpoint: Url,
}

impl RemoteLookup {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_timeout(endpoint: Url, timeout: Duration) -> Result<Self, LookupError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LookupError::Client)?;
        Ok(Self::with_client(http, endpoint))
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }
}

#[async_trait]
impl VideoSource for RemoteLookup {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn fetch(&self, video_id: &str) -> Result<LookupResult> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[(VIDEO_ID_PARAM, video_id)])
            .send()
            .await
            .map_err(LookupError::Request)?;

        // Non-2xx bodies are parsed like any other; the service may still
        // answer with a well-formed failure payload.
        let status = response.status();
        let body = response.bytes().await.map_err(LookupError::Request)?;
        let parsed: LookupResponse =
            serde_json::from_slice(&body).map_err(|source| LookupError::Decode {
                status: status.as_u16(),
                source,
            })?;

        debug!(
            video_id,
            status = status.as_u16(),
            success = parsed.success,
            "lookup response received"
        );
        Ok(parsed.into_result())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
