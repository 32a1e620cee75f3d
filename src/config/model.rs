//! Configuration data model.
//!
//! Every field has a default so a missing or partial file still works.

use serde::Deserialize;
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Screen appearance.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_true")]
    pub show_help: bool,
    #[serde(default = "default_highlight_symbol")]
    pub highlight_symbol: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_help: true,
            highlight_symbol: default_highlight_symbol(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// `EnvFilter` directive, overridden by `SHOPLIST_LOG`.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_level(),
            file: None,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_title() -> String {
    "Shopping List".to_string()
}
fn default_highlight_symbol() -> String {
    "▶ ".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
