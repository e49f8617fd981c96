//! Severity levels
//!
//! Levels are ordered from most to least severe. A logger's configured level
//! is a verbosity ceiling: a message is written when its level is less than or
//! equal to the ceiling, so a `Warn` logger writes `Fatal`, `Error` and `Warn`
//! and drops `Info` and `Debug`.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Log level
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "String", into = "&'static str")]
#[repr(u8)]
pub enum Level {
    /// Errors that must be handled
    Fatal = 0,
    /// Errors that should be handled
    Error = 1,
    /// Errors that could be ignored, worth noticing
    Warn = 2,
    /// Informational messages
    #[default]
    Info = 3,
    /// Debug messages
    Debug = 4,
}

impl Level {
    /// All levels, most severe first.
    pub const ALL: [Self; 5] = [
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
    ];

    /// Lowercase name, as accepted by [`parse_level`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Bracketed tag written into each line, e.g. `[WARN]`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Fatal => "[FATAL]",
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    /// Whether a message at `self` passes a logger configured at `ceiling`.
    #[inline]
    #[must_use]
    pub fn passes(self, ceiling: Self) -> bool {
        self <= ceiling
    }

    pub(crate) const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Fatal,
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            _ => Self::Debug,
        }
    }
}

/// Parse a level name, case-insensitively.
///
/// Unknown names, including the empty string, fall back to [`Level::Info`].
#[must_use]
pub fn parse_level(name: &str) -> Level {
    match name.to_ascii_lowercase().as_str() {
        "debug" => Level::Debug,
        "info" => Level::Info,
        "warn" => Level::Warn,
        "error" => Level::Error,
        "fatal" => Level::Fatal,
        _ => Level::Info,
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_level(s))
    }
}

impl From<&str> for Level {
    fn from(s: &str) -> Self {
        parse_level(s)
    }
}

impl From<String> for Level {
    fn from(s: String) -> Self {
        parse_level(&s)
    }
}

impl From<Level> for &'static str {
    fn from(level: Level) -> Self {
        level.as_str()
    }
}
