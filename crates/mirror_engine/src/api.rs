use std::time::Duration;

use mirror_core::{AnalysisRequest, AnalysisResult, HistoryRecord};
use mirror_logging::mirror_debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::wire::{self, AnalyzeBody, AnalyzeResponse, HistoryEntry};
use crate::{ApiError, FailureKind};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const ANALYZE_PATH: &str = "api/analyze";
const HISTORY_PATH: &str = "api/history";
const JSON: &str = "application/json";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }
}

/// Contract the client relies on from the analysis service.
#[async_trait::async_trait]
pub trait ReviewApi: Send + Sync {
    /// `POST /api/analyze`. One attempt, no retries.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ApiError>;

    /// `GET /api/history`, in the order the service returns it.
    async fn history(&self) -> Result<Vec<HistoryRecord>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestReviewApi {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestReviewApi {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::new(FailureKind::InvalidBaseUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ReviewApi for ReqwestReviewApi {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ApiError> {
        let endpoint = self.endpoint(ANALYZE_PATH)?;
        let body = serde_json::to_vec(&AnalyzeBody { url: request.url() })
            .map_err(|err| ApiError::new(FailureKind::Encode, err.to_string()))?;
        mirror_debug!("POST {}", endpoint);

        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let text = read_success_body(response).await?;
        let parsed: AnalyzeResponse = serde_json::from_str(&text)
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
        Ok(parsed.into())
    }

    async fn history(&self) -> Result<Vec<HistoryRecord>, ApiError> {
        let endpoint = self.endpoint(HISTORY_PATH)?;
        mirror_debug!("GET {}", endpoint);

        let response = self
            .client
            .get(endpoint)
            .header(ACCEPT, JSON)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let text = read_success_body(response).await?;
        let entries: Vec<HistoryEntry> = serde_json::from_str(&text)
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
        Ok(entries.into_iter().map(HistoryRecord::from).collect())
    }
}

/// Returns the body of a 2xx response, or a status error carrying whatever
/// message the service put in the rejection body.
async fn read_success_body(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response.text().await.map_err(map_reqwest_error);
    }

    let body = response.text().await.unwrap_or_default();
    let service_message = wire::service_message(&body);
    Err(ApiError::new(
        FailureKind::HttpStatus {
            status: status.as_u16(),
            service_message,
        },
        status.to_string(),
    ))
}

/// Parses the service root, making sure relative endpoint joins append to its
/// path rather than replacing the last segment.
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|err| ApiError::new(FailureKind::InvalidBaseUrl, err.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::new(
            FailureKind::InvalidBaseUrl,
            format!("not an http(s) base url: {raw}"),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let url = parse_base_url("http://localhost:5000").unwrap();
        assert_eq!(url.join(ANALYZE_PATH).unwrap().as_str(), "http://localhost:5000/api/analyze");

        let url = parse_base_url("https://review.example.com/mirror").unwrap();
        assert_eq!(
            url.join(HISTORY_PATH).unwrap().as_str(),
            "https://review.example.com/mirror/api/history"
        );
    }

    #[test]
    fn rejects_non_http_base() {
        let err = parse_base_url("mailto:someone@example.com").unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidBaseUrl);
        let err = parse_base_url("localhost:5000").unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidBaseUrl);
        let err = parse_base_url("not a url").unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidBaseUrl);
    }
}
