//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, WriterConfig};
use crate::level::{Level, parse_level};

fn flag(value: &str) -> bool {
    value != "0" && !value.eq_ignore_ascii_case("false")
}

impl Config {
    /// Create configuration from environment variables
    ///
    /// - `TASKLOG_LEVEL`: level name, unknown values mean `info`
    /// - `TASKLOG_FILE`: log to this file instead of stderr
    /// - `TASKLOG_TASK`: task label
    /// - `TASKLOG_TIME`, `TASKLOG_SOURCE`: `0`/`false` turn the field off
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("TASKLOG_LEVEL") {
            config.level = parse_level(&level);
        }
        if let Some(path) = lookup("TASKLOG_FILE").filter(|p| !p.is_empty()) {
            config.writer = WriterConfig::File { path: path.into() };
        }
        config.task = lookup("TASKLOG_TASK").filter(|t| !t.is_empty());
        if let Some(v) = lookup("TASKLOG_TIME") {
            config.display.time = flag(&v);
        }
        if let Some(v) = lookup("TASKLOG_SOURCE") {
            config.display.source = flag(&v);
        }

        config
    }

    /// Development configuration (debug level, stderr)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::Debug,
            ..Self::default()
        }
    }

    /// Production configuration (info level, appending to `path`)
    #[must_use]
    pub fn production(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            level: Level::Info,
            writer: WriterConfig::File { path: path.into() },
            display: DisplayConfig::default(),
            task: None,
        }
    }

    /// Test configuration (debug level, no timestamps, so lines are stable)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: Level::Debug,
            display: DisplayConfig {
                time: false,
                source: true,
            },
            ..Self::default()
        }
    }
}
