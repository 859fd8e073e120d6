//! Page view capabilities and the in-memory page the binary renders.

use serde::Serialize;
use shared::domain::ViewState;

/// Static text of the error container before anything overrides it.
pub const DEFAULT_ERROR_TEXT: &str = "動画が見つかりません。URLを確認してください。";
pub const LOADING_TEXT: &str = "読み込み中...";

/// What the controller may do to the page.
pub trait PageView {
    /// Puts every container back to its markup state before a load starts.
    fn begin_load(&mut self);
    /// Makes `state` the only visible container.
    fn show(&mut self, state: ViewState);
    fn set_title(&mut self, title: &str);
    fn set_description(&mut self, description: &str);
    fn set_embed_source(&mut self, src: &str);
    fn set_error_message(&mut self, message: &str);
}

/// Three containers with independent `hidden` flags, like the markup they
/// stand in for. Only `show` and `begin_load` touch the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    hidden: [bool; 3],
    title: String,
    description: String,
    embed_source: Option<String>,
    error_message: String,
}

impl Default for PageModel {
    fn default() -> Self {
        Self {
            hidden: [false, true, true],
            title: String::new(),
            description: String::new(),
            embed_source: None,
            error_message: DEFAULT_ERROR_TEXT.to_string(),
        }
    }
}

fn slot(state: ViewState) -> usize {
    match state {
        ViewState::Loading => 0,
        ViewState::Content => 1,
        ViewState::Error => 2,
    }
}

impl PageModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, state: ViewState) -> bool {
        !self.hidden[slot(state)]
    }

    pub fn visible_states(&self) -> Vec<ViewState> {
        ViewState::ALL
            .into_iter()
            .filter(|state| self.is_visible(*state))
            .collect()
    }

    /// The single visible state, or `None` if the invariant is broken.
    pub fn current(&self) -> Option<ViewState> {
        match self.visible_states().as_slice() {
            [state] => Some(*state),
            _ => None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn embed_source(&self) -> Option<&str> {
        self.embed_source.as_deref()
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn snapshot(&self) -> PageSnapshot<'_> {
        let view = self.current();
        PageSnapshot {
            view,
            title: (view == Some(ViewState::Content)).then_some(self.title.as_str()),
            description: (view == Some(ViewState::Content)).then_some(self.description.as_str()),
            embed_source: (view == Some(ViewState::Content))
                .then_some(self.embed_source.as_deref())
                .flatten(),
            error_message: (view == Some(ViewState::Error)).then_some(self.error_message.as_str()),
        }
    }

    /// Plain-text rendering of whatever is visible.
    pub fn render_text(&self) -> String {
        match self.current() {
            Some(ViewState::Loading) => LOADING_TEXT.to_string(),
            Some(ViewState::Content) => {
                let mut out = format!("{}\n\n{}", self.title, self.description);
                if let Some(src) = &self.embed_source {
                    out.push_str(&format!("\n\n{src}"));
                }
                out
            }
            Some(ViewState::Error) => self.error_message.clone(),
            None => String::new(),
        }
    }
}

impl PageView for PageModel {
    fn begin_load(&mut self) {
        *self = Self::default();
    }

    fn show(&mut self, state: ViewState) {
        self.hidden = [true; 3];
        self.hidden[slot(state)] = false;
        tracing::debug!(view = state.as_str(), "view switched");
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    fn set_embed_source(&mut self, src: &str) {
        self.embed_source = Some(src.to_string());
    }

    fn set_error_message(&mut self, message: &str) {
        self.error_message = message.to_string();
    }
}

/// JSON shape of the visible page.
#[derive(Debug, Serialize)]
pub struct PageSnapshot<'a> {
    pub view: Option<ViewState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<&'a str>,
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
