//! Local stand-in for the lookup service, for exercising the page offline.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use shared::{
    domain::{LookupResult, VideoDetails},
    protocol::LookupResponse,
};
use tracing::debug;

use crate::VideoSource;

pub const STAND_IN_DELAY: Duration = Duration::from_millis(1500);
/// Id that makes the stand-in answer with a failure.
pub const INVALID_VIDEO_ID: &str = "invalid";
pub const INVALID_VIDEO_MESSAGE: &str = "URLが無効、または非公開です";
/// Used when the stand-in is asked for an empty id.
pub const FALLBACK_VIDEO_ID: &str = "dQw4w9WgXcQ";
pub const SAMPLE_TITLE: &str = "【サンプル】美しい自然の風景";
pub const SAMPLE_DESCRIPTION: &str = "これはモックモードでの表示テストです。\n\
GASと連携すると、スプレッドシートの内容がここに表示されます。\n\
\n\
行の改行も\n\
このように反映されます。";

#[derive(Debug, Clone)]
pub struct StandInSource {
    delay: Duration,
}

impl Default for StandInSource {
    fn default() -> Self {
        Self::with_delay(STAND_IN_DELAY)
    }
}

impl StandInSource {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn canned_response(video_id: &str) -> LookupResponse {
        if video_id == INVALID_VIDEO_ID {
            return LookupResponse::rejected(INVALID_VIDEO_MESSAGE);
        }

        let video_id = if video_id.is_empty() {
            FALLBACK_VIDEO_ID
        } else {
            video_id
        };
        LookupResponse::found(VideoDetails {
            title: SAMPLE_TITLE.to_string(),
            video_id: video_id.to_string(),
            description: SAMPLE_DESCRIPTION.to_string(),
        })
    }
}

#[async_trait]
impl VideoSource for StandInSource {
    fn name(&self) -> &'static str {
        "stand-in"
    }

    async fn fetch(&self, video_id: &str) -> Result<LookupResult> {
        debug!(video_id, delay_ms = self.delay.as_millis() as u64, "stand-in lookup");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Self::canned_response(video_id).into_result())
    }
}
