//! Output sinks
//!
//! A [`Sink`] is the destination lines end up in. Every sink serializes its
//! own writes, so one [`Sink::write_all`] call lands as one uninterrupted
//! chunk even when many threads log at once. The logger adds no lock of its
//! own on top.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

/// Writable, closable output destination.
pub trait Sink: Send + Sync {
    /// Write the whole buffer as one unit.
    fn write_all(&self, buf: &[u8]) -> io::Result<()>;

    /// Flush and release the destination. Later writes fail.
    fn close(&self) -> io::Result<()>;
}

fn closed() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "log sink is closed")
}

// ============================================================================
// File
// ============================================================================

/// Sink backed by a file opened in append mode.
pub struct FileSink {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileSink {
    /// Open `path` for read/write, creating it if absent and appending if present.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(Some(file)),
        })
    }

    /// Path this sink was opened at
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        match self.file.lock().as_mut() {
            Some(file) => file.write_all(buf),
            None => Err(closed()),
        }
    }

    fn close(&self) -> io::Result<()> {
        match self.file.lock().take() {
            Some(mut file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for FileSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSink")
            .field("path", &self.path)
            .field("open", &self.file.lock().is_some())
            .finish()
    }
}

// ============================================================================
// Memory
// ============================================================================

/// In-memory sink. Clones share the same buffer.
///
/// Closing clears the buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Written lines, without their trailing newlines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Whether nothing has been written since creation or the last close.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        self.buf.lock().extend_from_slice(buf);
        Ok(())
    }

    fn close(&self) -> io::Result<()> {
        self.buf.lock().clear();
        Ok(())
    }
}

// ============================================================================
// Arbitrary writers
// ============================================================================

/// Sink over any [`Write`] implementation (stderr, stdout, sockets...).
pub struct WriterSink<W> {
    inner: Mutex<Option<W>>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap `writer`
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(Some(writer)),
        }
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        match self.inner.lock().as_mut() {
            Some(writer) => writer.write_all(buf),
            None => Err(closed()),
        }
    }

    fn close(&self) -> io::Result<()> {
        match self.inner.lock().take() {
            Some(mut writer) => writer.flush(),
            None => Ok(()),
        }
    }
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("open", &self.inner.lock().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shared_between_clones() {
        let sink = MemorySink::new();
        let other = sink.clone();
        sink.write_all(b"one\n").unwrap();
        other.write_all(b"two\n").unwrap();
        assert_eq!(sink.lines(), vec!["one", "two"]);
    }

    #[test]
    fn test_memory_sink_close_resets() {
        let sink = MemorySink::new();
        sink.write_all(b"hello\n").unwrap();
        sink.close().unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "existing\n").unwrap();

        let sink = FileSink::open(&path).unwrap();
        sink.write_all(b"appended\n").unwrap();
        sink.close().unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "existing\nappended\n"
        );
    }

    #[test]
    fn test_file_sink_write_after_close_fails() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::open(dir.path().join("closed.log")).unwrap();
        sink.close().unwrap();
        let err = sink.write_all(b"late\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        // closing twice is harmless
        sink.close().unwrap();
    }

    #[test]
    fn test_file_sink_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileSink::open(dir.path().join("missing").join("app.log"));
        assert!(result.is_err());
    }

    #[test]
    fn test_writer_sink_flushes_on_close() {
        let sink = WriterSink::new(io::BufWriter::new(Vec::new()));
        sink.write_all(b"buffered\n").unwrap();
        sink.close().unwrap();
        assert!(sink.write_all(b"late\n").is_err());
    }
}
