//! Configuration and file management for browser-state
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Tab session persistence

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod session;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use session::{Session, SessionTab};
