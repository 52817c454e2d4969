use crate::Tier;

/// Which main panel the UI should show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Idle,
    Loading,
    Result(ResultView),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub score: i64,
    pub tier: Tier,
    pub summary: String,
    pub roadmap: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub id: String,
    pub name: String,
    /// Calendar date of the scan, `YYYY-MM-DD` in UTC.
    pub date: String,
    pub score: i64,
    pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub panel: Panel,
    /// False while a request is in flight; the submit control must be disabled.
    pub submit_enabled: bool,
    pub dark_mode: bool,
    pub history: Vec<HistoryRowView>,
    pub dirty: bool,
}
