//! RepoMirror core: pure state machine, score tiers and view-model helpers.
mod effect;
mod history;
mod msg;
mod request;
mod state;
mod tier;
mod update;
mod view_model;

pub use effect::Effect;
pub use history::{HistoryLog, HistoryRecord};
pub use msg::Msg;
pub use request::{
    AnalysisFailure, AnalysisRequest, AnalysisResult, RequestState, FALLBACK_FAILURE_MESSAGE,
    INVALID_URL_MESSAGE, REQUIRED_URL_MARKER,
};
pub use state::{AppState, DEFAULT_DARK_MODE};
pub use tier::{classify, Tier, GOLD_THRESHOLD, SILVER_THRESHOLD};
pub use update::update;
pub use view_model::{AppViewModel, HistoryRowView, Panel, ResultView};
