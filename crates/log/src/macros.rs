//! Variadic logging macros
//!
//! Each macro takes a logger followed by one or more values and joins the
//! values with single spaces:
//!
//! ```rust
//! use tasklog::{Level, Logger, MemorySink};
//!
//! let sink = MemorySink::new();
//! let log = Logger::new(sink.clone(), Level::Info);
//! let user = 42;
//! tasklog::info!(log, "user", user, "logged in");
//! assert!(sink.contents().contains("[INFO] user 42 logged in"));
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __spaced {
    ($($value:expr),+) => {
        $crate::Spaced(&[$(&$value as &dyn ::core::fmt::Display),+])
    };
}

/// Log values at an explicit level
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr; $($value:expr),+ $(,)?) => {
        $logger.log($level, $crate::__spaced!($($value),+))
    };
}

/// Log values at debug level
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.debug($crate::__spaced!($($value),+))
    };
}

/// Log values at info level
#[macro_export]
macro_rules! info {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.info($crate::__spaced!($($value),+))
    };
}

/// Log values at warn level
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.warn($crate::__spaced!($($value),+))
    };
}

/// Log values at error level
#[macro_export]
macro_rules! error {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.error($crate::__spaced!($($value),+))
    };
}

/// Log values at fatal level (does not exit)
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.fatal($crate::__spaced!($($value),+))
    };
}

/// Write values as a raw line, without prefix or level check
#[macro_export]
macro_rules! print_line {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.print_line($crate::__spaced!($($value),+))
    };
}

#[cfg(test)]
mod tests {
    use crate::{DisplayConfig, Level, Logger, MemorySink};
    use pretty_assertions::assert_eq;

    fn capture(level: Level) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let log = Logger::new(sink.clone(), level).with_display(DisplayConfig {
            time: false,
            source: false,
        });
        (log, sink)
    }

    #[test]
    fn test_values_joined_with_spaces() {
        let (log, sink) = capture(Level::Debug);
        let n = 3;
        crate::debug!(log, "retry", n, "of", 5);
        crate::print_line!(log, "raw", 1.5);
        crate::log!(log, Level::Warn; "explicit", 'x');
        assert_eq!(
            sink.lines(),
            vec!["-  [DEBUG] retry 3 of 5", "raw 1.5", "-  [WARN] explicit x"]
        );
    }

    #[test]
    fn test_macros_respect_level() {
        let (log, sink) = capture(Level::Error);
        crate::info!(log, "hidden");
        crate::warn!(log, "hidden");
        crate::error!(log, "shown");
        crate::fatal!(log, "shown", "too");
        assert_eq!(sink.lines(), vec!["-  [ERROR] shown", "-  [FATAL] shown too"]);
    }

    #[test]
    fn test_macro_location_is_invocation_site() {
        let sink = MemorySink::new();
        let log = Logger::new(sink.clone(), Level::Info).with_display(DisplayConfig {
            time: false,
            source: true,
        });
        let line = line!() + 1;
        crate::info!(log, "here");
        assert_eq!(sink.contents(), format!("- src/macros.rs:{line} [INFO] here\n"));
    }
}
