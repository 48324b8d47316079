//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/browser-state/`, `~/.cache/browser-state/`
//! - macOS: `~/Library/Application Support/browser-state/`, `~/Library/Caches/browser-state/`
//! - Windows: `%APPDATA%\browser-state\`, `%LOCALAPPDATA%\browser-state\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "browser-state";
pub const LOCAL_SESSION_FILE: &str = ".browser-state.session.toml";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory: {:?}", dir))?;
    Ok(dir)
}

/// Get path to global session file
pub fn global_session_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("session.toml"))
}

/// Get path to local session file (in CWD)
pub fn local_session_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(LOCAL_SESSION_FILE))
}

/// Check if local session file exists
pub fn has_local_session() -> bool {
    local_session_path().map(|p| p.exists()).unwrap_or(false)
}

/// Session file in use: the local one if present, the global one otherwise
pub fn session_path() -> Result<PathBuf> {
    if has_local_session() {
        local_session_path()
    } else {
        global_session_path()
    }
}
