//! Writer implementations
//!
//! [`RawWriter`] hands the logger's sink to code that only knows
//! [`io::Write`], and [`Logger`] implements [`MakeWriter`] so a `tracing`
//! subscriber can share the same destination (and follow reopens).

use std::io;

use tracing_subscriber::fmt::MakeWriter;

use crate::logger::Logger;

/// Pass-through writer into a logger's current sink.
///
/// Bytes are forwarded unchanged: no prefix, no level check. Each `write`
/// reaches the sink on its own, so a `writeln!` made of several writes may
/// interleave with other threads' lines.
#[derive(Debug, Clone)]
pub struct RawWriter {
    logger: Logger,
}

impl RawWriter {
    pub(crate) fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl io::Write for RawWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.logger.try_write(buf).map(|()| buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Logger {
    type Writer = RawWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.writer()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::level::Level;
    use crate::logger::Logger;
    use crate::sink::MemorySink;
    use tempfile::TempDir;

    #[test]
    fn test_raw_writer_passes_bytes_through() {
        let sink = MemorySink::new();
        let log = Logger::new(sink.clone(), Level::Fatal);

        let mut w = log.writer();
        writeln!(w, "raw {}", 1).unwrap();
        w.flush().unwrap();

        assert_eq!(sink.contents(), "raw 1\n");
    }

    #[test]
    fn test_raw_writer_reports_closed_sink() {
        let dir = TempDir::new().unwrap();
        let log = Logger::open(dir.path().join("app.log"), Level::Info).unwrap();
        let mut w = log.writer();
        assert_eq!(w.write(b"kept\n").unwrap(), 5);

        log.close().unwrap();
        let err = w.write(b"lost\n").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_tracing_subscriber_shares_sink() {
        let sink = MemorySink::new();
        let log = Logger::new(sink.clone(), Level::Info);

        let subscriber = tracing_subscriber::fmt()
            .with_writer(log.clone())
            .without_time()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("from tracing");
        });
        log.info("from logger");

        let out = sink.contents();
        assert!(out.contains("from tracing"), "{out}");
        assert!(out.contains("[INFO] from logger"), "{out}");
    }
}
