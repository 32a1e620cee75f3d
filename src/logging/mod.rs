//! Diagnostic logging to a file.
//!
//! The terminal belongs to the UI while the app runs, so events go to
//! `shoplist.log` under the local data directory (or the configured path).
//! If no file can be opened, logging is simply off.

use crate::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV: &str = "SHOPLIST_LOG";

/// Install the global subscriber. Returns the log path when one was opened.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    if !config.enabled {
        return None;
    }

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let path = log_file_path(config);
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return None;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .try_init()
        .ok()?;

    tracing::info!(path = %path.display(), "Logging initialized");
    Some(path)
}

fn log_file_path(config: &LoggingConfig) -> PathBuf {
    if let Some(ref file) = config.file {
        return file.clone();
    }
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("shoplist")
        .join("shoplist.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path() {
        let config = LoggingConfig {
            file: Some(PathBuf::from("/var/tmp/list.log")),
            ..LoggingConfig::default()
        };
        assert_eq!(log_file_path(&config), PathBuf::from("/var/tmp/list.log"));

        let default_path = log_file_path(&LoggingConfig::default());
        assert!(default_path.ends_with("shoplist/shoplist.log"));
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let config = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert!(init_tracing(&config).is_none());
    }
}
