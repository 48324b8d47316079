//! Tab session state
//!
//! A tab is identified by a [`TabId`] and never mutated in place: every update
//! produces a new [`TabSessionState`] that replaces the old one at the same
//! position. The parent relation is a plain id, resolved by lookup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Unique, stable identifier of a tab
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    /// Allocate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TabId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Raw thumbnail bytes, shared between snapshots
#[derive(Clone, PartialEq, Eq)]
pub struct Thumbnail(Arc<Vec<u8>>);

impl Thumbnail {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Arc::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Thumbnail({} bytes)", self.0.len())
    }
}

/// Security information of the page loaded in a tab
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityInfoState {
    pub secure: bool,
    pub host: String,
    pub issuer: String,
}

/// Content of a tab (what is loaded and how far along it is)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentState {
    pub url: String,
    pub title: String,
    pub loading: bool,
    /// Load progress in percent (0..=100)
    pub progress: u8,
    pub search_terms: String,
    pub security_info: SecurityInfoState,
    #[serde(skip)]
    pub thumbnail: Option<Thumbnail>,
}

impl ContentState {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// A single tab in the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSessionState {
    pub id: TabId,
    /// Tab this one was opened from. May point to a tab that no longer exists.
    pub parent_id: Option<TabId>,
    pub private: bool,
    pub content: ContentState,
}

impl TabSessionState {
    /// Create a normal tab with a fresh id
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_id(TabId::new(), url)
    }

    pub fn with_id(id: impl Into<TabId>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            private: false,
            content: ContentState::new(url),
        }
    }

    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn parent(mut self, parent_id: impl Into<TabId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.content.title = title.into();
        self
    }
}
