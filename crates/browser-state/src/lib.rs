//! Browser state store
//!
//! A single-writer store for browser state: tabs, custom tabs, downloads and
//! recently closed tabs. State is an immutable snapshot replaced on every
//! committed action. Actions flow through a middleware chain into a pure
//! reducer, and subscribers are told about every state change.
//!
//! ```no_run
//! use browser_state::{BrowserState, Store, TabListAction, TabSessionState};
//! use browser_state::middleware::LoggingMiddleware;
//!
//! let store = Store::new(BrowserState::default(), vec![Box::new(LoggingMiddleware::new())]);
//! let _subscription = store.subscribe(|state| println!("{} tabs", state.tabs.len()));
//!
//! store
//!     .dispatch(TabListAction::add(TabSessionState::new("https://www.mozilla.org")))
//!     .join()
//!     .ok();
//! ```

pub mod actions;
pub(crate) mod background;
pub mod dispatcher;
pub mod error;
pub mod middleware;
pub mod reducer;
pub mod reducers;
pub mod state;
pub mod store;
pub mod subscription;

pub use actions::{
    Action, ContentAction, CustomTabListAction, DownloadAction, RecentlyClosedAction,
    SessionAction, SystemAction, TabListAction,
};
pub use dispatcher::{DispatchHandle, Dispatcher};
pub use error::StoreError;
pub use middleware::{Middleware, MiddlewareContext, Next};
pub use reducer::{combine_reducers, reduce, Reducer};
pub use state::{
    BrowserState, ContentState, DownloadState, DownloadStatus, RecentlyClosedState,
    RecoverableTab, SecurityInfoState, TabId, TabSessionState, Target, Thumbnail,
};
pub use store::Store;
pub use subscription::{StateStream, Subscription};
