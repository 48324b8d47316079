//! Browser State Module
//!
//! Contains all state types held by the store, organized by feature.

mod browser;
mod download;
mod recently_closed;
mod tab;
mod target;

pub use browser::BrowserState;
pub use download::{DownloadState, DownloadStatus};
pub use recently_closed::{RecentlyClosedState, RecoverableTab, DEFAULT_MAX_CLOSED_TABS};
pub use tab::{ContentState, SecurityInfoState, TabId, TabSessionState, Thumbnail};
pub use target::Target;
