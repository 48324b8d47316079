use crate::actions::DownloadAction;
use crate::state::BrowserState;

pub fn reduce_download(mut state: BrowserState, action: &DownloadAction) -> BrowserState {
    match action {
        DownloadAction::AddDownload(download) => {
            state
                .downloads
                .insert(download.id.clone(), download.clone());
        }
        DownloadAction::UpdateDownload(download) => {
            if let Some(existing) = state.downloads.get_mut(&download.id) {
                *existing = download.clone();
            } else {
                log::debug!("Update for unknown download {}", download.id);
            }
        }
        DownloadAction::RemoveDownload(id) => {
            state.downloads.remove(id);
        }
        DownloadAction::RemoveAllDownloads => {
            state.downloads.clear();
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DownloadState, DownloadStatus};

    #[test]
    fn test_download_lifecycle() {
        let download = DownloadState::new("d1", "https://example.org/file.zip");
        let state = reduce_download(
            BrowserState::default(),
            &DownloadAction::AddDownload(download.clone()),
        );
        assert_eq!(state.downloads.len(), 1);

        let mut updated = download;
        updated.status = DownloadStatus::Completed;
        let state = reduce_download(state, &DownloadAction::UpdateDownload(updated));
        assert_eq!(state.downloads["d1"].status, DownloadStatus::Completed);

        let state = reduce_download(state, &DownloadAction::RemoveDownload("d1".to_string()));
        assert!(state.downloads.is_empty());
    }

    #[test]
    fn test_update_unknown_download_is_noop() {
        let state = reduce_download(
            BrowserState::default(),
            &DownloadAction::UpdateDownload(DownloadState::new("d1", "https://example.org")),
        );
        assert!(state.downloads.is_empty());
    }
}
