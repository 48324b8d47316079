//! Application configuration
//!
//! Configuration loaded from `.browser-state.toml`. Every field has a default,
//! so partial files are fine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration loaded from `.browser-state.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Capacity of the recently closed tabs list
    #[serde(default = "default_max_closed_tabs")]
    pub max_closed_tabs: usize,

    /// Write the tab list to the session file and restore it on start
    #[serde(default = "default_persist_session")]
    pub persist_session: bool,

    /// Include private tabs in the session file
    #[serde(default)]
    pub restore_private_tabs: bool,

    /// Log level (error, warn, info, debug, trace), overrides RUST_LOG
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_max_closed_tabs() -> usize {
    10
}

fn default_persist_session() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_closed_tabs: default_max_closed_tabs(),
            persist_session: default_persist_session(),
            restore_private_tabs: false,
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    ///
    /// Parse failures are logged and fall back to defaults. Use [`AppConfig::read`]
    /// when the caller has to report them itself (e.g. before logging is set up).
    pub fn load() -> Self {
        match Self::read() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Like [`AppConfig::load`], but returns parse failures
    pub fn read() -> Result<Self> {
        Self::from_content(crate::load_config_file())
    }

    /// Config from the content of a config file, defaults if there is none
    pub fn from_content(content: Option<String>) -> Result<Self> {
        match content {
            Some(content) => {
                let config = Self::parse(&content).context("Failed to parse config file")?;
                log::info!("Loaded app config from file");
                Ok(config)
            }
            None => {
                log::debug!("Using default app config");
                Ok(Self::default())
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.max_closed_tabs, 10);
        assert!(config.persist_session);
        assert!(!config.restore_private_tabs);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            max_closed_tabs = 25
            persist_session = false
            restore_private_tabs = true
            log_level = "trace"
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.max_closed_tabs, 25);
        assert!(!config.persist_session);
        assert!(config.restore_private_tabs);
        assert_eq!(config.log_level.as_deref(), Some("trace"));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config = AppConfig::parse("max_closed_tabs = 3").unwrap();
        assert_eq!(config.max_closed_tabs, 3);
        assert!(config.persist_session);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_from_content_without_file_uses_defaults() {
        let config = AppConfig::from_content(None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_from_content_reports_parse_failure() {
        let err = AppConfig::from_content(Some("max_closed_tabs = [".to_string())).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_config_rejects_wrong_types() {
        assert!(AppConfig::parse("max_closed_tabs = \"many\"").is_err());
    }
}
