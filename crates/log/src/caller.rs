//! Call-site resolution
//!
//! By default the location comes from [`Location::caller`], threaded through
//! the logger's `#[track_caller]` methods. Loggers wrapped in helper layers can
//! ask for an explicit frame offset instead, which walks a [`backtrace`]
//! (feature `backtrace`) starting from the logger's own frames.

use std::panic::Location;
use std::path::Path;

/// How far up the stack the reported location sits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CallerDepth {
    /// The direct call site of the logging method
    #[default]
    Tracked,
    /// `n` frames above the direct call site; `Frames(0)` equals `Tracked`
    Frames(usize),
}

/// Render `<parent-dir>/<file>:<line>` for the requested depth.
///
/// Returns an empty string when the frame cannot be resolved.
pub(crate) fn resolve(depth: CallerDepth, tracked: &'static Location<'static>) -> String {
    match depth {
        CallerDepth::Tracked | CallerDepth::Frames(0) => {
            short_location(tracked.file(), tracked.line())
        }
        CallerDepth::Frames(skip) => frames_above_logger(skip).unwrap_or_default(),
    }
}

/// Keep the last two path components: `/home/app/src/main.rs` -> `src/main.rs:12`.
pub(crate) fn short_location(file: &str, line: u32) -> String {
    let mut parts = Path::new(file)
        .components()
        .rev()
        .map(|c| c.as_os_str().to_string_lossy());
    match (parts.next(), parts.next()) {
        (Some(name), Some(parent)) => format!("{parent}/{name}:{line}"),
        (Some(name), None) => format!("{name}:{line}"),
        _ => String::new(),
    }
}

#[cfg(feature = "backtrace")]
fn frames_above_logger(skip: usize) -> Option<String> {
    let bt = backtrace::Backtrace::new();
    // Inlined calls share a physical frame, innermost symbol first.
    let symbols: Vec<_> = bt.frames().iter().flat_map(|f| f.symbols()).collect();

    // Outermost symbol that still belongs to the logger; everything after it
    // is user code.
    let anchor = symbols.iter().rposition(|symbol| {
        symbol
            .name()
            .is_some_and(|name| name.to_string().contains(crate::logger::LOGGER_SYMBOL))
    })?;

    symbols[anchor + 1..]
        .iter()
        .filter_map(|symbol| {
            let file = symbol.filename()?;
            let line = symbol.lineno()?;
            Some(short_location(&file.to_string_lossy(), line))
        })
        .nth(skip)
}

#[cfg(not(feature = "backtrace"))]
fn frames_above_logger(_skip: usize) -> Option<String> {
    None
}
