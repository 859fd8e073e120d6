//! Classification of a finished lookup into what the page should show.

use shared::{
    domain::{LookupResult, VideoDetails, ViewState},
    error::LoadFailure,
};
use tracing::{error, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Content(VideoDetails),
    Failed(LoadFailure),
}

impl LoadOutcome {
    pub fn view_state(&self) -> ViewState {
        match self {
            LoadOutcome::Content(_) => ViewState::Content,
            LoadOutcome::Failed(_) => ViewState::Error,
        }
    }
}

/// An `Err` from the source is a transport failure; a `Failure` result is an
/// application failure.
pub fn classify(result: anyhow::Result<LookupResult>) -> LoadOutcome {
    match result {
        Ok(LookupResult::Success(details)) => LoadOutcome::Content(details),
        Ok(LookupResult::Failure { message }) => {
            let failure = LoadFailure::application(message);
            warn!(%failure, "lookup rejected");
            LoadOutcome::Failed(failure)
        }
        Err(err) => {
            error!("lookup call failed: {err:#}");
            LoadOutcome::Failed(LoadFailure::transport(format!("{err:#}")))
        }
    }
}
