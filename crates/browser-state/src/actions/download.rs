use crate::state::DownloadState;

/// Download bookkeeping actions
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadAction {
    AddDownload(DownloadState),
    /// Replace an existing download (matched by id)
    UpdateDownload(DownloadState),
    RemoveDownload(String),
    RemoveAllDownloads,
}
