use crate::history::{HistoryLog, HistoryRecord};
use crate::request::RequestState;
use crate::tier::classify;
use crate::view_model::{AppViewModel, HistoryRowView, Panel, ResultView};

/// Theme used when no preference has been stored.
pub const DEFAULT_DARK_MODE: bool = true;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input: String,
    request: RequestState,
    history: HistoryLog,
    dark_mode: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            request: RequestState::Idle,
            history: HistoryLog::default(),
            dark_mode: DEFAULT_DARK_MODE,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state using a previously persisted theme.
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn view(&self) -> AppViewModel {
        let panel = match &self.request {
            RequestState::Idle => Panel::Idle,
            RequestState::Loading => Panel::Loading,
            RequestState::Success(result) => Panel::Result(ResultView {
                score: result.score,
                tier: classify(result.score),
                summary: result.summary.clone(),
                roadmap: result.roadmap.clone(),
            }),
            RequestState::Error(message) => Panel::Error(message.clone()),
        };

        AppViewModel {
            panel,
            submit_enabled: !self.request.is_loading(),
            dark_mode: self.dark_mode,
            history: self.history.records().iter().map(history_row).collect(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, input: String) {
        self.input = input;
    }

    pub(crate) fn set_request(&mut self, request: RequestState) {
        self.request = request;
        self.dirty = true;
    }

    pub(crate) fn replace_history(&mut self, records: Vec<HistoryRecord>) {
        self.history.replace(records);
        self.dirty = true;
    }

    /// Flips the theme and returns the new value.
    pub(crate) fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dirty = true;
        self.dark_mode
    }
}

fn history_row(record: &HistoryRecord) -> HistoryRowView {
    HistoryRowView {
        id: record.id.clone(),
        name: record.display_name(),
        date: record.created_at.format("%Y-%m-%d").to_string(),
        score: record.score,
        tier: classify(record.score),
    }
}
