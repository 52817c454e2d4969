#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send one analyze request to the service.
    Analyze { request: crate::AnalysisRequest },
    /// Fetch the history snapshot and replace the held list.
    RefreshHistory,
    /// Write the theme preference to durable storage.
    PersistTheme { dark_mode: bool },
}
