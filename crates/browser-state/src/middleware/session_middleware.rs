//! Session Middleware
//!
//! Persists the tab list to the session file and restores it on request.
//!
//! # Session Persistence
//!
//! - `SessionAction::Load` reads the session file in the background and
//!   dispatches `TabListAction::Restore` with its tabs
//! - Every action that changes the persisted tabs (or the selection) writes a
//!   fresh snapshot in the background
//! - `SessionAction::Save` writes a snapshot unconditionally
//! - Uses the local session file if it exists, otherwise the global one
//!
//! File I/O never runs on the store worker and failures are only logged.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use browser_state_config::{AppConfig, Session, SessionTab};
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;

use crate::actions::{Action, SessionAction, TabListAction};
use crate::middleware::{Middleware, MiddlewareContext, Next};
use crate::state::{BrowserState, TabId, TabSessionState};

/// Middleware for tab session persistence
pub struct SessionMiddleware {
    runtime: Runtime,
    /// Explicit session file, `None` for the local/global lookup
    path: Option<PathBuf>,
    include_private: bool,
    last_saved: Option<Session>,
    /// Newest snapshot handed to a writer; older writers skip their write
    generation: Arc<AtomicU64>,
    write_lock: Arc<Mutex<()>>,
    pending: Vec<JoinHandle<()>>,
}

impl SessionMiddleware {
    /// Session middleware using the default session file lookup
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::build(None, config.restore_private_tabs)
    }

    /// Session middleware bound to a specific file
    pub fn with_path(path: impl Into<PathBuf>, include_private: bool) -> Result<Self> {
        Self::build(Some(path.into()), include_private)
    }

    fn build(path: Option<PathBuf>, include_private: bool) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("browser-session")
            .enable_all()
            .build()
            .context("Failed to create tokio runtime for session I/O")?;

        Ok(Self {
            runtime,
            path,
            include_private,
            last_saved: None,
            generation: Arc::new(AtomicU64::new(0)),
            write_lock: Arc::new(Mutex::new(())),
            pending: Vec::new(),
        })
    }

    fn load(&mut self, ctx: &MiddlewareContext) {
        log::info!("SessionMiddleware: Loading session");
        let path = self.path.clone();
        let include_private = self.include_private;
        let dispatcher = ctx.dispatcher();
        let write_lock = Arc::clone(&self.write_lock);

        let handle = self.runtime.spawn_blocking(move || {
            let guard = write_lock.lock().unwrap_or_else(PoisonError::into_inner);
            let session = match path {
                Some(path) => match Session::load_from_path(&path) {
                    Ok(session) => session,
                    Err(e) => {
                        log::error!("SessionMiddleware: {:#}", e);
                        return;
                    }
                },
                None => Session::load(),
            };
            drop(guard);

            match restore_action(&session, include_private) {
                Some(action) => {
                    dispatcher.dispatch(action);
                }
                None => log::info!("SessionMiddleware: Session has no tabs to restore"),
            }
        });
        self.track(handle);
    }

    fn save(&mut self, state: &BrowserState, force: bool) {
        let session = snapshot(state, self.include_private);
        if !force && self.last_saved.as_ref().map(|s| &s.session) == Some(&session.session) {
            return;
        }
        self.last_saved = Some(session.clone());

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let write_lock = Arc::clone(&self.write_lock);
        let path = self.path.clone();
        let mut session = session;

        let handle = self.runtime.spawn_blocking(move || {
            let _guard = write_lock.lock().unwrap_or_else(PoisonError::into_inner);
            if latest.load(Ordering::SeqCst) != generation {
                log::trace!("SessionMiddleware: Skipping stale snapshot {}", generation);
                return;
            }
            let result = match path {
                Some(path) => session.save_to_path(&path),
                None => session.save(),
            };
            if let Err(e) = result {
                log::error!("SessionMiddleware: Failed to save session: {:#}", e);
            }
        });
        self.track(handle);
    }

    fn track(&mut self, handle: JoinHandle<()>) {
        self.pending.retain(|handle| !handle.is_finished());
        self.pending.push(handle);
    }
}

impl Drop for SessionMiddleware {
    fn drop(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        if pending.is_empty() {
            return;
        }
        log::debug!("SessionMiddleware: Waiting for {} session task(s)", pending.len());
        self.runtime.block_on(async {
            for handle in pending {
                if let Err(e) = handle.await {
                    log::error!("SessionMiddleware: Session task failed: {}", e);
                }
            }
        });
    }
}

impl Middleware for SessionMiddleware {
    fn handle(&mut self, ctx: &MiddlewareContext, next: Next<'_>, action: Action) {
        let request = match &action {
            Action::Session(request) => Some(request.clone()),
            _ => None,
        };

        next.run(action);

        match request {
            Some(SessionAction::Load) => self.load(ctx),
            Some(SessionAction::Save) => self.save(&ctx.state(), true),
            None => self.save(&ctx.state(), false),
        }
    }
}

/// Persisted view of `state`
pub fn snapshot(state: &BrowserState, include_private: bool) -> Session {
    let tabs: Vec<SessionTab> = state
        .tabs
        .iter()
        .filter(|tab| include_private || !tab.private)
        .map(|tab| SessionTab {
            id: tab.id.to_string(),
            url: tab.content.url.clone(),
            title: tab.content.title.clone(),
            parent_id: tab.parent_id.as_ref().map(TabId::to_string),
            private: tab.private,
        })
        .collect();

    let selected_tab_id = state
        .selected_tab()
        .filter(|tab| tabs.iter().any(|saved| saved.id == tab.id.as_str()))
        .map(|tab| tab.id.to_string());

    Session::new(tabs, selected_tab_id)
}

/// `Restore` action bringing back the tabs of `session`, if it has any
pub fn restore_action(session: &Session, include_private: bool) -> Option<TabListAction> {
    let tabs: Vec<TabSessionState> = session
        .tabs()
        .iter()
        .filter(|tab| include_private || !tab.private)
        .map(|tab| {
            let mut restored = TabSessionState::with_id(tab.id.as_str(), tab.url.as_str())
                .private(tab.private)
                .title(tab.title.as_str());
            restored.parent_id = tab.parent_id.as_deref().map(TabId::from);
            restored
        })
        .collect();

    if tabs.is_empty() {
        return None;
    }

    Some(TabListAction::Restore {
        tabs,
        selected_tab_id: session.selected_tab_id().map(TabId::from),
    })
}
