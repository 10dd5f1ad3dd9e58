use std::fs;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};

use crate::model::config::AppConfig;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid ui.date_format: {0:?}")]
    InvalidDateFormat(String),
}

/// `$XDG_CONFIG_HOME/tasknote/config.toml`, falling back to `~/.config`.
pub fn default_config_path() -> Option<PathBuf> {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(std::env::var_os("HOME")?).join(".config"),
    };
    Some(base.join("tasknote").join("config.toml"))
}

/// Load the config.
///
/// An explicit path must exist. Without one, the default location is tried
/// and a missing file yields the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(AppConfig::default()),
        },
    };
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), "config loaded");
    parse_config(&text)
}

/// Parse and validate config text.
pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(text)?;
    if !is_valid_date_format(&config.ui.date_format) {
        return Err(ConfigError::InvalidDateFormat(config.ui.date_format));
    }
    Ok(config)
}

/// chrono panics when displaying a malformed format, so reject it up front.
fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::DEFAULT_DATE_FORMAT;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"[ui]
show_key_hints = false
date_format = "%Y-%m-%d"

[ui.colors]
highlight = "#C18652"

[seed]
sample_tasks = true

[log]
level = "debug"
file = "/tmp/tasknote.log"
"##
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(sample_config()).unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.date_format, "%Y-%m-%d");
        assert_eq!(
            config.ui.colors.get("highlight").map(|s| s.as_str()),
            Some("#C18652")
        );
        assert!(config.seed.sample_tasks);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/tasknote.log")));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.ui.show_key_hints);
        assert_eq!(config.ui.date_format, DEFAULT_DATE_FORMAT);
        assert!(!config.seed.sample_tasks);
        assert_eq!(config.log.level, "warn");
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_invalid_date_format() {
        let err = parse_config("[ui]\ndate_format = \"%Q\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDateFormat(_)));
    }

    #[test]
    fn test_bad_toml() {
        let err = parse_config("[ui\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, sample_config()).unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert!(config.seed.sample_tasks);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
