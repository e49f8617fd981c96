//! # tasklog - leveled logging with task labels
//!
//! A small synchronous logger: every call formats one line and writes it to a
//! sink (file, buffer or any writer) when its level passes the configured
//! ceiling.
//!
//! ```text
//! 2024/05/01 10:12:03.482113 req-42 api/handler.rs:88 [WARN] slow upstream 812ms
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tasklog::{Level, Logger};
//!
//! fn main() -> tasklog::LogResult<()> {
//!     let log = Logger::open("app.log", Level::Info)?;
//!     log.info("server starting");
//!
//!     let req = log.with_task_name("req-42");
//!     tasklog::warn!(req, "slow upstream", 812, "ms");
//!
//!     // after logrotate moved app.log away
//!     log.reopen()?;
//!     log.close()
//! }
//! ```
//!
//! Levels run from [`Level::Fatal`] (always written) to [`Level::Debug`].
//! Task views created with [`Logger::with_task_name`] share the sink and the
//! level of their parent, so [`Logger::reset_level`] and [`Logger::reopen`]
//! affect all of them.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod caller;
mod config;
mod core;
mod format;
mod level;
mod logger;
mod macros;
mod sink;
mod writer;

// Public API
pub use caller::CallerDepth;
pub use config::{Config, DisplayConfig, WriterConfig};
pub use crate::core::{LogError, LogResult};
pub use format::Spaced;
pub use level::{Level, parse_level};
pub use logger::Logger;
pub use sink::{FileSink, MemorySink, Sink, WriterSink};
pub use writer::RawWriter;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Config, Level, LogResult, Logger, MemorySink, Sink, parse_level};
}
