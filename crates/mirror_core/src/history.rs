use chrono::{DateTime, Utc};

const GITHUB_URL_PREFIX: &str = "https://github.com/";

/// One past analysis run as stored by the service. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub id: String,
    pub repo_url: String,
    pub repo_name: Option<String>,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Repository name when the service supplied one, else the URL minus the
    /// GitHub prefix.
    pub fn display_name(&self) -> String {
        match self.repo_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => self.repo_url.replacen(GITHUB_URL_PREFIX, "", 1),
        }
    }
}

/// Snapshot of the service's history, in service order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
}

impl HistoryLog {
    /// Swaps in a fresh snapshot. Nothing from the previous one survives.
    pub fn replace(&mut self, records: Vec<HistoryRecord>) {
        self.records = records;
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
