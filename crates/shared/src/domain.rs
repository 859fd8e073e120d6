use serde::{Deserialize, Serialize};

/// Query string key carrying the video identifier on the page URL.
pub const VIDEO_ID_PARAM: &str = "v";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupRequest {
    video_id: Option<String>,
}

impl LookupRequest {
    pub fn new(video_id: Option<String>) -> Self {
        Self {
            video_id: video_id.filter(|id| !id.is_empty()),
        }
    }

    /// Builds the request from a query string such as `?v=abc123&t=10`.
    /// The leading `?` is optional. Only the first `v` pair is considered.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let video_id = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == VIDEO_ID_PARAM)
            .map(|(_, value)| value.into_owned());
        Self::new(video_id)
    }

    pub fn from_page_url(page_url: &url::Url) -> Self {
        Self::from_query(page_url.query().unwrap_or_default())
    }

    pub fn video_id(&self) -> Option<&str> {
        self.video_id.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDetails {
    pub title: String,
    pub video_id: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Success(VideoDetails),
    /// `message` is `None` when the service gave no usable message.
    Failure { message: Option<String> },
}

impl LookupResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    Loading,
    Content,
    Error,
}

impl ViewState {
    pub const ALL: [ViewState; 3] = [ViewState::Loading, ViewState::Content, ViewState::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Content => "content",
            ViewState::Error => "error",
        }
    }
}
