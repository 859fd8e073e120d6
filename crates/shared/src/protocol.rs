//! JSON exchanged with the lookup service.

use serde::{Deserialize, Serialize};

use crate::domain::{LookupResult, VideoDetails};

/// Body returned by `GET <endpoint>?v=<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<VideoPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LookupResponse {
    pub fn found(details: VideoDetails) -> Self {
        Self {
            success: true,
            data: Some(VideoPayload {
                title: Some(details.title),
                video_id: Some(details.video_id),
                description: Some(details.description),
            }),
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Maps the wire body onto the domain result.
    ///
    /// Success without a payload carrying a video id is a failure, and an
    /// empty message is treated as no message at all. A null or absent
    /// title/description renders as empty text.
    pub fn into_result(self) -> LookupResult {
        let message = self.message.filter(|m| !m.is_empty());
        if !self.success {
            return LookupResult::Failure { message };
        }

        match self.data {
            Some(VideoPayload {
                title,
                video_id: Some(video_id),
                description,
            }) => LookupResult::Success(VideoDetails {
                title: title.unwrap_or_default(),
                video_id,
                description: description.unwrap_or_default(),
            }),
            _ => LookupResult::Failure { message },
        }
    }
}
