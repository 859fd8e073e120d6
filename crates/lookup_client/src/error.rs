use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid lookup endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build lookup http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("lookup request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("lookup response (status {status}) is not valid JSON: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}
