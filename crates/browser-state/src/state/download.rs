use serde::{Deserialize, Serialize};

/// Status of a download
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownloadStatus {
    #[default]
    Initiated,
    Downloading,
    Paused,
    Cancelled,
    Failed,
    Completed,
}

/// A download tracked by the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadState {
    pub id: String,
    pub url: String,
    pub file_name: Option<String>,
    pub status: DownloadStatus,
    pub content_length: Option<u64>,
    pub current_bytes: u64,
    pub private: bool,
}

impl DownloadState {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            file_name: None,
            status: DownloadStatus::default(),
            content_length: None,
            current_bytes: 0,
            private: false,
        }
    }
}
