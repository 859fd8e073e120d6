use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown when the service reports failure without a message of its own.
pub const NOT_FOUND_MESSAGE: &str = "動画が見つかりません";
/// Shown when the lookup call itself fails.
pub const COMMUNICATION_ERROR_MESSAGE: &str = "通信エラーが発生しました";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadFailureKind {
    MissingParameter,
    ApplicationFailure,
    TransportFailure,
}

/// Why a page load ended in the error view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    #[error("page url has no video id parameter")]
    MissingParameter,
    #[error("lookup service reported failure: {message}")]
    ApplicationFailure { message: String },
    #[error("lookup call failed: {cause}")]
    TransportFailure { cause: String },
}

impl LoadFailure {
    pub fn application(message: Option<String>) -> Self {
        Self::ApplicationFailure {
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string()),
        }
    }

    pub fn transport(cause: impl Into<String>) -> Self {
        Self::TransportFailure {
            cause: cause.into(),
        }
    }

    pub fn kind(&self) -> LoadFailureKind {
        match self {
            Self::MissingParameter => LoadFailureKind::MissingParameter,
            Self::ApplicationFailure { .. } => LoadFailureKind::ApplicationFailure,
            Self::TransportFailure { .. } => LoadFailureKind::TransportFailure,
        }
    }

    /// Text for the error view. `None` leaves the static default in place.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::MissingParameter => None,
            Self::ApplicationFailure { message } => Some(message.as_str()),
            Self::TransportFailure { .. } => Some(COMMUNICATION_ERROR_MESSAGE),
        }
    }
}
