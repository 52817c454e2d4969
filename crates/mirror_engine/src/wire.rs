//! JSON shapes exchanged with the analysis service.
//!
//! Responses are decoded into these structs and converted to core types right
//! at the boundary, so nothing downstream sees untyped JSON.

use chrono::{DateTime, Utc};
use mirror_core::{AnalysisResult, HistoryRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeBody<'a> {
    pub url: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeResponse {
    pub score: i64,
    pub summary: String,
    pub roadmap: Vec<String>,
}

impl From<AnalyzeResponse> for AnalysisResult {
    fn from(wire: AnalyzeResponse) -> Self {
        AnalysisResult {
            score: wire.score,
            summary: wire.summary,
            roadmap: wire.roadmap,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HistoryEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub repo_url: String,
    #[serde(default)]
    pub repo_name: Option<String>,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

impl From<HistoryEntry> for HistoryRecord {
    fn from(wire: HistoryEntry) -> Self {
        HistoryRecord {
            id: wire.id,
            repo_url: wire.repo_url,
            repo_name: wire.repo_name,
            score: wire.score,
            created_at: wire.created_at,
        }
    }
}

/// Pulls the `error` field out of a rejection body. Anything unparseable
/// counts as no message.
pub(crate) fn service_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|text| !text.trim().is_empty())
}
