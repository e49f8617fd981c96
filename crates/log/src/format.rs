//! Line formatting (timestamp, prefix, values)

use std::fmt::{self, Display, Write as _};

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::level::Level;

/// Joins values with single spaces when displayed.
///
/// Built by the crate macros so `info!(log, "user", id, "logged in")` renders
/// as `user 42 logged in`.
#[derive(Clone, Copy)]
pub struct Spaced<'a>(pub &'a [&'a dyn Display]);

impl Display for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.0.iter();
        if let Some(first) = values.next() {
            first.fmt(f)?;
        }
        for value in values {
            f.write_char(' ')?;
            value.fmt(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Spaced({self})")
    }
}

/// Append `YYYY/MM/DD HH:MM:SS.ffffff ` at the given UTC offset.
pub(crate) fn write_timestamp(buf: &mut String, offset: UtcOffset) {
    let now = OffsetDateTime::now_utc().to_offset(offset);
    let format = format_description!(
        "[year]/[month]/[day] [hour]:[minute]:[second].[subsecond digits:6]"
    );
    if let Ok(ts) = now.format(format) {
        buf.push_str(&ts);
        buf.push(' ');
    }
}

/// Render one complete line, trailing newline included.
///
/// `time` carries the offset to stamp the line with, `None` leaves it unstamped.
pub(crate) fn render(
    time: Option<UtcOffset>,
    task: Option<&str>,
    location: &str,
    level: Level,
    msg: &dyn Display,
) -> String {
    let mut line = String::with_capacity(96);
    if let Some(offset) = time {
        write_timestamp(&mut line, offset);
    }
    let task = task.filter(|t| !t.is_empty()).unwrap_or("-");
    // Writing into a String cannot fail.
    let _ = writeln!(line, "{task} {location} {} {msg}", level.tag());
    line
}
