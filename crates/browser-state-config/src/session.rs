//! Tab session persistence
//!
//! Handles loading and saving the tab list with local/global precedence.
//!
//! # Precedence
//!
//! 1. `$CWD/.browser-state.session.toml` - Local session (highest priority)
//! 2. `~/.config/browser-state/session.toml` - Global session (fallback)
//!
//! On save: Use local file if it exists, otherwise use global.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths;

const SESSION_VERSION: u32 = 1;

/// Session metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// A persisted tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTab {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub private: bool,
}

/// Session data - the actual persisted state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_tab_id: Option<String>,
    #[serde(default)]
    pub tabs: Vec<SessionTab>,
}

/// Complete session with metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub meta: SessionMeta,
    #[serde(default)]
    pub session: SessionData,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            meta: SessionMeta {
                last_modified: Utc::now(),
                version: SESSION_VERSION,
            },
            session: SessionData::default(),
        }
    }
}

impl Session {
    pub fn new(tabs: Vec<SessionTab>, selected_tab_id: Option<String>) -> Self {
        Self {
            session: SessionData {
                selected_tab_id,
                tabs,
            },
            ..Self::default()
        }
    }

    /// Load session with precedence: local > global > default
    pub fn load() -> Self {
        if paths::has_local_session() {
            if let Ok(path) = paths::local_session_path() {
                match Self::load_from_path(&path) {
                    Ok(session) => {
                        log::info!("Loaded local session from {:?}", path);
                        return session;
                    }
                    Err(e) => log::warn!("Ignoring local session: {:#}", e),
                }
            }
        }

        if let Ok(path) = paths::global_session_path() {
            if path.exists() {
                match Self::load_from_path(&path) {
                    Ok(session) => {
                        log::info!("Loaded global session from {:?}", path);
                        return session;
                    }
                    Err(e) => log::warn!("Ignoring global session: {:#}", e),
                }
            }
        }

        log::info!("No existing session found, using defaults");
        Self::default()
    }

    /// Load session from specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {:?}", path))
    }

    /// Save session (to local if exists, otherwise global)
    pub fn save(&mut self) -> Result<()> {
        let path = paths::session_path()?;
        self.save_to_path(&path)
    }

    /// Save session to specific path
    pub fn save_to_path(&mut self, path: &Path) -> Result<()> {
        self.meta.last_modified = Utc::now();
        let content = toml::to_string_pretty(self).context("Failed to serialize session")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write session file: {:?}", path))?;

        log::info!("Saved session to {:?}", path);
        Ok(())
    }

    pub fn tabs(&self) -> &[SessionTab] {
        &self.session.tabs
    }

    pub fn selected_tab_id(&self) -> Option<&str> {
        self.session.selected_tab_id.as_deref()
    }
}
