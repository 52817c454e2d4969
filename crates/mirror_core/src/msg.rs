#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The UI is up; triggers the initial history load.
    Started,
    /// User edited the repository URL input.
    InputChanged(String),
    /// User submitted the current input for analysis.
    SubmitClicked,
    /// The analysis service answered (or the request failed).
    AnalysisFinished(Result<crate::AnalysisResult, crate::AnalysisFailure>),
    /// A history fetch succeeded with a fresh snapshot.
    HistoryLoaded(Vec<crate::HistoryRecord>),
    /// User flipped light/dark mode.
    ThemeToggled,
}
