//! Logging configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Levels accepted by [`LoggingConfig::level`]
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Formats accepted by [`LoggingConfig::format`]
pub const LOG_FORMATS: &[&str] = &["pretty", "compact", "json"];

/// Errors raised while loading a logging configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid logging config: {0}")]
    Invalid(String),
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Whether to log to file
    pub log_to_file: bool,
    /// Log file path
    pub log_file: Option<PathBuf>,
    /// Whether to log to console
    pub log_to_console: bool,
    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_to_file: false,
            log_file: None,
            log_to_console: true,
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Reject levels and formats the subscriber does not understand
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}'",
                self.level
            )));
        }
        if !LOG_FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log format '{}'",
                self.format
            )));
        }
        if self.log_to_file && self.log_file.is_none() {
            return Err(ConfigError::Invalid(
                "log_to_file is set but log_file is missing".to_string(),
            ));
        }
        Ok(())
    }

    /// Layer `overrides` over this config. Unset fields keep their value.
    ///
    /// Naming a log file turns file logging on unless the overrides say
    /// otherwise.
    pub fn merge(&mut self, overrides: LoggingOverrides) {
        if let Some(level) = overrides.level {
            self.level = level;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if let Some(log_file) = overrides.log_file {
            self.log_file = Some(log_file);
            self.log_to_file = true;
        }
        if let Some(log_to_file) = overrides.log_to_file {
            self.log_to_file = log_to_file;
        }
        if let Some(log_to_console) = overrides.log_to_console {
            self.log_to_console = log_to_console;
        }
    }
}

/// A partial [`LoggingConfig`], e.g. from command-line flags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoggingOverrides {
    pub level: Option<String>,
    pub log_to_file: Option<bool>,
    pub log_file: Option<PathBuf>,
    pub log_to_console: Option<bool>,
    pub format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.log_to_file);
        assert!(config.log_to_console);
        assert_eq!(config.format, "pretty");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_only_touches_set_fields() {
        let mut config = LoggingConfig::from_toml_str(
            "level = \"warn\"\nformat = \"compact\"\nlog_to_console = false\n",
        )
        .unwrap();

        config.merge(LoggingOverrides {
            format: Some("json".to_string()),
            ..LoggingOverrides::default()
        });

        assert_eq!(config.level, "warn");
        assert_eq!(config.format, "json");
        assert!(!config.log_to_console);
        assert!(!config.log_to_file);
    }

    #[test]
    fn test_merge_log_file_enables_file_logging() {
        let mut config = LoggingConfig::default();
        config.merge(LoggingOverrides {
            log_file: Some(PathBuf::from("logs/client.log")),
            ..LoggingOverrides::default()
        });

        assert!(config.log_to_file);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/client.log")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_explicit_log_to_file_wins() {
        let mut config = LoggingConfig::default();
        config.merge(LoggingOverrides {
            log_file: Some(PathBuf::from("logs/client.log")),
            log_to_file: Some(false),
            ..LoggingOverrides::default()
        });

        assert!(!config.log_to_file);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/client.log")));
    }

    #[test]
    fn test_empty_overrides_change_nothing() {
        let mut config = LoggingConfig::default();
        config.merge(LoggingOverrides::default());
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = LoggingConfig::from_toml_str("level = \"error\"\nformat = \"json\"\n").unwrap();
        assert_eq!(config.level, "error");
        assert_eq!(config.format, "json");
        assert!(config.log_to_console);
    }

    #[test]
    fn test_from_toml_rejects_unknown_level() {
        let err = LoggingConfig::from_toml_str("level = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_file_logging_requires_path() {
        let err = LoggingConfig::from_toml_str("log_to_file = true").unwrap_err();
        assert!(err.to_string().contains("log_file"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "level = \"warn\"").unwrap();
        writeln!(file, "log_to_file = true").unwrap();
        writeln!(file, "log_file = \"logs/client.log\"").unwrap();

        let config = LoggingConfig::load(file.path()).unwrap();
        assert_eq!(config.level, "warn");
        assert_eq!(config.log_file, Some(PathBuf::from("logs/client.log")));
    }

    #[test]
    fn test_load_missing_file() {
        let err = LoggingConfig::load("/nonexistent/faultline.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
