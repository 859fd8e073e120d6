//! Drives one page load from the page URL to a terminal view.

use std::sync::Arc;

use lookup_client::{source_for, VideoSource};
use shared::{
    domain::{LookupRequest, ViewState},
    error::LoadFailure,
};
use tracing::{debug, info};
use url::Url;

use crate::{config::Settings, embed::embed_url, view::PageView};

use super::events::{classify, LoadOutcome};

pub struct ViewController<V> {
    source: Arc<dyn VideoSource>,
    view: V,
}

impl<V: PageView> ViewController<V> {
    pub fn new(source: Arc<dyn VideoSource>, view: V) -> Self {
        Self { source, view }
    }

    pub fn from_settings(settings: &Settings, view: V) -> anyhow::Result<Self> {
        let source = source_for(&settings.source_config()?)?;
        Ok(Self::new(source, view))
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Runs one load: loading, then exactly one of content or error.
    pub async fn initialize(&mut self, page_url: &Url) -> LoadOutcome {
        self.view.begin_load();
        self.view.show(ViewState::Loading);

        let request = LookupRequest::from_page_url(page_url);
        let Some(video_id) = request.video_id() else {
            debug!(%page_url, "no video id on page url");
            let outcome = LoadOutcome::Failed(LoadFailure::MissingParameter);
            self.apply(&outcome);
            return outcome;
        };

        info!(video_id, source = self.source.name(), "looking up video");
        let outcome = classify(self.source.fetch(video_id).await);
        self.apply(&outcome);
        outcome
    }

    fn apply(&mut self, outcome: &LoadOutcome) {
        match outcome {
            LoadOutcome::Content(details) => {
                self.view.set_embed_source(&embed_url(&details.video_id));
                self.view.set_title(&details.title);
                self.view.set_description(&details.description);
            }
            LoadOutcome::Failed(failure) => {
                if let Some(message) = failure.user_message() {
                    self.view.set_error_message(message);
                }
            }
        }
        self.view.show(outcome.view_state());
    }
}
