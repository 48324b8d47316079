//! Content actions
//!
//! Update the content of a single tab or custom tab, addressed by id.

use crate::state::{SecurityInfoState, TabId, Thumbnail};

#[derive(Debug, Clone, PartialEq)]
pub enum ContentAction {
    UpdateUrl { id: TabId, url: String },
    UpdateTitle { id: TabId, title: String },
    UpdateProgress { id: TabId, progress: u8 },
    UpdateLoadingState { id: TabId, loading: bool },
    UpdateSearchTerms { id: TabId, search_terms: String },
    UpdateSecurityInfo { id: TabId, security_info: SecurityInfoState },
    UpdateThumbnail { id: TabId, thumbnail: Thumbnail },
    RemoveThumbnail { id: TabId },
}

impl ContentAction {
    /// Id of the tab this action targets
    pub fn tab_id(&self) -> &TabId {
        match self {
            ContentAction::UpdateUrl { id, .. }
            | ContentAction::UpdateTitle { id, .. }
            | ContentAction::UpdateProgress { id, .. }
            | ContentAction::UpdateLoadingState { id, .. }
            | ContentAction::UpdateSearchTerms { id, .. }
            | ContentAction::UpdateSecurityInfo { id, .. }
            | ContentAction::UpdateThumbnail { id, .. }
            | ContentAction::RemoveThumbnail { id } => id,
        }
    }
}
