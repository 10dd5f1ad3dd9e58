use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex overrides keyed by theme slot, e.g. `highlight = "#C18652"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// chrono format string used for task creation dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
            date_format: default_date_format(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Start the task list with the three sample tasks
    #[serde(default)]
    pub sample_tasks: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `tasknote=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// The TUI only logs when this is set
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_true() -> bool {
    true
}

pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}
