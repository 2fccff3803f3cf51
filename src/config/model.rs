//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::quotes::Topic;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            providers: ProvidersConfig::default(),
            share: ShareConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Remote quote provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Per-request timeout applied to every provider call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Share and export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    #[serde(default = "default_hashtag")]
    pub hashtag: String,
    /// Directory `quote.txt` is written to. `~` expands to the home directory.
    #[serde(default = "default_save_dir")]
    pub save_dir: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            hashtag: default_hashtag(),
            save_dir: default_save_dir(),
        }
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Topic selected at startup.
    #[serde(default)]
    pub default_topic: Topic,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// How long informational notices stay on screen.
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_topic: Topic::default(),
            timestamp_format: default_timestamp_format(),
            notice_secs: default_notice_secs(),
        }
    }
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Filter directive, e.g. `"info"` or `"devquote=debug"`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    4
}
fn default_hashtag() -> String {
    "DevQuote".to_string()
}
fn default_save_dir() -> String {
    ".".to_string()
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_notice_secs() -> u64 {
    4
}
fn default_log_dir() -> String {
    "~/.local/share/devquote/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
