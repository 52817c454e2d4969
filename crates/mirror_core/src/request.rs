use std::fmt;

/// Substring every submitted repository URL must contain.
pub const REQUIRED_URL_MARKER: &str = "github.com";
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid GitHub URL";
pub const FALLBACK_FAILURE_MESSAGE: &str = "Analysis failed. Check backend connection.";

/// A repository URL that passed validation and may be sent to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    url: String,
}

impl AnalysisRequest {
    /// Validates raw user input. The text is kept exactly as typed.
    pub fn parse(raw: &str) -> Result<Self, AnalysisFailure> {
        if !raw.contains(REQUIRED_URL_MARKER) {
            return Err(AnalysisFailure::Validation);
        }
        Ok(Self {
            url: raw.to_owned(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Payload returned by a successful analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub score: i64,
    pub summary: String,
    pub roadmap: Vec<String>,
}

/// Why a submission ended in the error state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisFailure {
    /// Input lacked the repository marker; nothing went over the wire.
    Validation,
    /// The request could not complete or the reply was unusable.
    Transport,
    /// The service rejected the request with its own message.
    Service(String),
}

impl AnalysisFailure {
    /// Builds a failure from the optional error text of a rejected request.
    ///
    /// Blank text counts as absent.
    pub fn from_service_message(message: Option<String>) -> Self {
        match message {
            Some(text) if !text.trim().is_empty() => AnalysisFailure::Service(text),
            _ => AnalysisFailure::Transport,
        }
    }

    /// User-facing text for the error panel.
    pub fn message(&self) -> String {
        match self {
            AnalysisFailure::Validation => INVALID_URL_MESSAGE.to_owned(),
            AnalysisFailure::Transport => FALLBACK_FAILURE_MESSAGE.to_owned(),
            AnalysisFailure::Service(text) => text.clone(),
        }
    }
}

impl fmt::Display for AnalysisFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Lifecycle of the current submission. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(AnalysisResult),
    Error(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }
}
