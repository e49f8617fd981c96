//! Configuration types
//!
//! - `Config`: level, writer, task label and display options
//! - `presets`: environment loading and ready-made setups

mod presets;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{LogError, LogResult};
use crate::level::Level;
use crate::logger::Logger;

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Level ceiling
    pub level: Level,

    /// Output writer configuration
    pub writer: WriterConfig,

    /// Task label applied to the built logger
    pub task: Option<String>,

    /// Display configuration
    pub display: DisplayConfig,
}

/// Writer configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WriterConfig {
    /// Write to stderr
    #[default]
    Stderr,
    /// Write to stdout
    Stdout,
    /// Append to a file that can be reopened for rotation
    File {
        /// Log file path
        path: PathBuf,
    },
}

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prefix lines with `YYYY/MM/DD HH:MM:SS.micros`
    pub time: bool,
    /// Include the caller's `dir/file:line`
    pub source: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: true,
        }
    }
}

impl Config {
    /// Build a logger from this configuration.
    pub fn build(&self) -> LogResult<Logger> {
        let logger = match &self.writer {
            WriterConfig::Stderr => Logger::from_writer(std::io::stderr(), self.level),
            WriterConfig::Stdout => Logger::from_writer(std::io::stdout(), self.level),
            WriterConfig::File { path } => {
                if path.as_os_str().is_empty() {
                    return Err(LogError::Config("file writer needs a path".to_string()));
                }
                Logger::open(path, self.level)?
            }
        };
        let logger = logger.with_display(self.display);
        Ok(match self.task.as_deref() {
            Some(task) => logger.with_task_name(task),
            None => logger,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.level, Level::Info);
        assert_eq!(config.writer, WriterConfig::Stderr);
        assert!(config.display.time);
        assert!(config.display.source);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config = serde_json::from_str(
            r#"{"level":"WARN","writer":{"type":"file","path":"logs/app.log"},"display":{"time":false}}"#,
        )
        .unwrap();
        assert_eq!(config.level, Level::Warn);
        assert_eq!(
            config.writer,
            WriterConfig::File {
                path: PathBuf::from("logs/app.log")
            }
        );
        assert!(!config.display.time);
        assert!(config.display.source);
        assert_eq!(config.task, None);
    }

    #[test]
    fn test_build_file_logger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("built.log");
        let config = Config {
            level: Level::Debug,
            writer: WriterConfig::File { path: path.clone() },
            task: Some("boot".to_string()),
            display: DisplayConfig {
                time: false,
                source: false,
            },
        };

        let log = config.build().unwrap();
        assert_eq!(log.path(), Some(path.as_path()));
        log.debug("ready");
        log.close().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "boot  [DEBUG] ready\n");
    }

    #[test]
    fn test_build_rejects_empty_path() {
        let config = Config {
            writer: WriterConfig::File {
                path: PathBuf::new(),
            },
            ..Config::default()
        };
        assert!(matches!(config.build(), Err(LogError::Config(_))));
    }

    #[test]
    fn test_build_reports_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            writer: WriterConfig::File {
                path: dir.path().join("no-such-dir").join("app.log"),
            },
            ..Config::default()
        };
        assert!(matches!(config.build(), Err(LogError::Open { .. })));
    }
}
