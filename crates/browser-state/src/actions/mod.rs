//! Actions module
//!
//! Every requested state change is an [`Action`]. Actions are tagged by the
//! part of the state they affect, so each reducer matches only its own variant.

pub mod content;
pub mod custom_tab_list;
pub mod download;
pub mod recently_closed;
pub mod session;
pub mod system;
pub mod tab_list;

pub use content::ContentAction;
pub use custom_tab_list::CustomTabListAction;
pub use download::DownloadAction;
pub use recently_closed::RecentlyClosedAction;
pub use session::SessionAction;
pub use system::SystemAction;
pub use tab_list::TabListAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Regular tab list and selection
    TabList(TabListAction),
    /// Custom tabs
    CustomTabList(CustomTabListAction),
    /// Content of a single tab
    Content(ContentAction),
    /// Downloads map
    Download(DownloadAction),
    /// Recently closed tabs
    RecentlyClosed(RecentlyClosedAction),
    /// System events
    System(SystemAction),
    /// Session persistence (middleware only)
    Session(SessionAction),
}

impl From<TabListAction> for Action {
    fn from(action: TabListAction) -> Self {
        Action::TabList(action)
    }
}

impl From<CustomTabListAction> for Action {
    fn from(action: CustomTabListAction) -> Self {
        Action::CustomTabList(action)
    }
}

impl From<ContentAction> for Action {
    fn from(action: ContentAction) -> Self {
        Action::Content(action)
    }
}

impl From<DownloadAction> for Action {
    fn from(action: DownloadAction) -> Self {
        Action::Download(action)
    }
}

impl From<RecentlyClosedAction> for Action {
    fn from(action: RecentlyClosedAction) -> Self {
        Action::RecentlyClosed(action)
    }
}

impl From<SystemAction> for Action {
    fn from(action: SystemAction) -> Self {
        Action::System(action)
    }
}

impl From<SessionAction> for Action {
    fn from(action: SessionAction) -> Self {
        Action::Session(action)
    }
}
