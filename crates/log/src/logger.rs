//! Level-filtered logger
//!
//! A [`Logger`] is a cheap handle over shared state: the sink, the level
//! ceiling and the backing file path. Views derived with
//! [`Logger::with_task_name`] share that state and only differ in their task
//! label, caller depth and display options.

use std::fmt::{self, Display};
use std::io;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use arc_swap::ArcSwap;
use time::UtcOffset;

use crate::caller::{self, CallerDepth};
use crate::config::DisplayConfig;
use crate::core::{LogError, LogResult};
use crate::format;
use crate::level::Level;
use crate::sink::{FileSink, Sink, WriterSink};
use crate::writer::RawWriter;

/// Symbol prefix of the logger's own frames, used to anchor backtraces.
#[cfg_attr(not(feature = "backtrace"), allow(dead_code))]
pub(crate) const LOGGER_SYMBOL: &str = concat!(module_path!(), "::Logger");

type SharedSink = Box<dyn Sink>;

struct Shared {
    level: AtomicU8,
    sink: ArcSwap<SharedSink>,
    path: Option<PathBuf>,
    // Read once: the local offset is unavailable once other threads exist.
    offset: UtcOffset,
}

/// Leveled logger writing `task location [LEVEL] message` lines to a sink.
///
/// # Example
///
/// ```rust
/// use tasklog::{Level, Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let log = Logger::new(sink.clone(), Level::Warn);
///
/// log.info("dropped");
/// log.with_task_name("req-42").warn("slow upstream");
///
/// let out = sink.contents();
/// assert!(!out.contains("dropped"));
/// assert!(out.contains("req-42"));
/// assert!(out.contains("[WARN] slow upstream"));
/// ```
#[derive(Clone)]
pub struct Logger {
    shared: Arc<Shared>,
    task: Option<Arc<str>>,
    depth: CallerDepth,
    display: DisplayConfig,
}

impl Logger {
    /// Wrap an already-open sink.
    pub fn new(sink: impl Sink + 'static, level: Level) -> Self {
        Self::with_shared(Box::new(sink), level, None)
    }

    /// Wrap any writer (stderr, stdout, a socket...).
    pub fn from_writer<W: io::Write + Send + 'static>(writer: W, level: Level) -> Self {
        Self::new(WriterSink::new(writer), level)
    }

    /// Open (create or append to) the file at `path` and log into it.
    ///
    /// The path is remembered so [`reopen`](Self::reopen) can rotate the handle.
    pub fn open(path: impl AsRef<Path>, level: Level) -> LogResult<Self> {
        let path = path.as_ref();
        let sink = FileSink::open(path).map_err(|e| LogError::open(path, e))?;
        Ok(Self::with_shared(
            Box::new(sink),
            level,
            Some(path.to_path_buf()),
        ))
    }

    fn with_shared(sink: SharedSink, level: Level, path: Option<PathBuf>) -> Self {
        Self {
            shared: Arc::new(Shared {
                level: AtomicU8::new(level as u8),
                sink: ArcSwap::from_pointee(sink),
                path,
                offset: UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
            }),
            task: None,
            depth: CallerDepth::Tracked,
            display: DisplayConfig::default(),
        }
    }

    // ------------------------------------------------------------------------
    // Views and settings
    // ------------------------------------------------------------------------

    /// Derive a view that labels every line with `task`.
    ///
    /// The view shares sink and level with `self`; `self` keeps its own label.
    #[must_use]
    pub fn with_task_name(&self, task: impl Into<String>) -> Self {
        let task: String = task.into();
        Self {
            shared: Arc::clone(&self.shared),
            task: (!task.is_empty()).then(|| Arc::from(task)),
            depth: self.depth,
            display: self.display,
        }
    }

    /// Replace the display options of this view.
    #[must_use]
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Report locations `depth` frames above the direct call site.
    ///
    /// Use this when the logger is always called through wrapper functions.
    /// Frames are read from debug info, so builds without line tables (or
    /// without the `backtrace` feature) log an empty location instead.
    pub fn set_caller_skip_depth(&mut self, depth: usize) {
        self.depth = CallerDepth::Frames(depth);
    }

    /// Set the caller depth of this view.
    pub fn set_caller_depth(&mut self, depth: CallerDepth) {
        self.depth = depth;
    }

    /// Caller depth of this view
    pub fn caller_depth(&self) -> CallerDepth {
        self.depth
    }

    /// Change the level ceiling for this logger and every view sharing it.
    pub fn reset_level(&self, level: Level) {
        self.shared.level.store(level as u8, Ordering::Relaxed);
    }

    /// Current level ceiling
    pub fn level(&self) -> Level {
        Level::from_u8(self.shared.level.load(Ordering::Relaxed))
    }

    /// Whether a message at `level` would be written.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.level())
    }

    /// Task label of this view
    pub fn task_name(&self) -> Option<&str> {
        self.task.as_deref()
    }

    /// Backing file path, if the logger was opened from a file
    pub fn path(&self) -> Option<&Path> {
        self.shared.path.as_deref()
    }

    /// Display options of this view
    pub fn display(&self) -> DisplayConfig {
        self.display
    }

    // ------------------------------------------------------------------------
    // Emission
    // ------------------------------------------------------------------------

    /// Log `msg` at `level`, located at this view's caller depth.
    #[track_caller]
    pub fn log(&self, level: Level, msg: impl Display) {
        if self.enabled(level) {
            self.emit(level, self.depth, Location::caller(), &msg);
        }
    }

    /// Log `msg` at `level`, located `skip` frames above this call.
    ///
    /// `skip = 0` reports the call site itself.
    #[track_caller]
    pub fn log_at(&self, level: Level, skip: usize, msg: impl Display) {
        if self.enabled(level) {
            self.emit(level, CallerDepth::Frames(skip), Location::caller(), &msg);
        }
    }

    /// Log at [`Level::Debug`]
    #[track_caller]
    pub fn debug(&self, msg: impl Display) {
        if self.enabled(Level::Debug) {
            self.emit(Level::Debug, self.depth, Location::caller(), &msg);
        }
    }

    /// Log at [`Level::Info`]
    #[track_caller]
    pub fn info(&self, msg: impl Display) {
        if self.enabled(Level::Info) {
            self.emit(Level::Info, self.depth, Location::caller(), &msg);
        }
    }

    /// Log at [`Level::Warn`]
    #[track_caller]
    pub fn warn(&self, msg: impl Display) {
        if self.enabled(Level::Warn) {
            self.emit(Level::Warn, self.depth, Location::caller(), &msg);
        }
    }

    /// Log at [`Level::Error`]
    #[track_caller]
    pub fn error(&self, msg: impl Display) {
        if self.enabled(Level::Error) {
            self.emit(Level::Error, self.depth, Location::caller(), &msg);
        }
    }

    /// Log at [`Level::Fatal`].
    ///
    /// This only picks the most severe label; it does not stop the process.
    #[track_caller]
    pub fn fatal(&self, msg: impl Display) {
        if self.enabled(Level::Fatal) {
            self.emit(Level::Fatal, self.depth, Location::caller(), &msg);
        }
    }

    /// Write `msg` and a newline straight to the sink.
    ///
    /// No prefix, no timestamp and no level check. Prefer the leveled methods
    /// unless the text is already formatted.
    pub fn print_line(&self, msg: impl Display) {
        self.write(format!("{msg}\n").as_bytes());
    }

    fn emit(
        &self,
        level: Level,
        depth: CallerDepth,
        tracked: &'static Location<'static>,
        msg: &dyn Display,
    ) {
        let location = if self.display.source {
            caller::resolve(depth, tracked)
        } else {
            String::new()
        };
        let line = format::render(
            self.display.time.then_some(self.shared.offset),
            self.task.as_deref(),
            &location,
            level,
            msg,
        );
        self.write(line.as_bytes());
    }

    fn write(&self, bytes: &[u8]) {
        if let Err(e) = self.try_write(bytes) {
            tracing::warn!(error = %e, "dropped log line");
        }
    }

    pub(crate) fn try_write(&self, bytes: &[u8]) -> io::Result<()> {
        self.shared.sink.load().write_all(bytes)
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Close the sink. Lines logged afterwards are dropped.
    pub fn close(&self) -> LogResult<()> {
        self.shared.sink.load().close().map_err(LogError::Close)?;
        tracing::debug!(path = ?self.shared.path, "log sink closed");
        Ok(())
    }

    /// Reopen the backing file, e.g. after it was moved away by a rotation tool.
    ///
    /// Does nothing for loggers not created with [`Logger::open`]. The new
    /// handle is visible to every view; the old one is closed afterwards.
    pub fn reopen(&self) -> LogResult<()> {
        let Some(path) = self.shared.path.as_deref() else {
            return Ok(());
        };
        let sink: SharedSink =
            Box::new(FileSink::open(path).map_err(|e| LogError::open(path, e))?);
        let old = self.shared.sink.swap(Arc::new(sink));
        if let Err(e) = old.close() {
            tracing::warn!(path = %path.display(), error = %e, "failed to close rotated log file");
        }
        tracing::debug!(path = %path.display(), "log file reopened");
        Ok(())
    }

    /// Raw writer into the current sink, for code that wants an [`std::io::Write`].
    pub fn writer(&self) -> RawWriter {
        RawWriter::new(self.clone())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("task", &self.task)
            .field("depth", &self.depth)
            .field("path", &self.shared.path)
            .finish_non_exhaustive()
    }
}
