//! CI runner log commands
//!
//! The CI runner understands a small set of in-band commands on stdout:
//! `::group::<name>` / `::endgroup::` fold the enclosed lines into a named,
//! collapsible section, and `::error::<message>` marks the job failure.
//! Everything here writes to an explicit sink so marker behavior stays
//! observable in tests; production callers pass stdout.

use std::io::Write;

/// Escapes property data for an in-band runner command.
///
/// `%`, `\r` and `\n` would otherwise terminate or corrupt the command line.
#[must_use]
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Writes a plain informational line.
pub fn info<W: Write>(sink: &mut W, message: &str) {
    let _ = writeln!(sink, "{message}");
}

/// Marks the job as failed with the given message.
pub fn set_failed<W: Write>(sink: &mut W, message: &str) {
    let _ = writeln!(sink, "::error::{}", escape_data(message));
}

/// An open log group that closes itself.
///
/// Opening writes the `::group::` marker; the matching `::endgroup::` is
/// written on drop, so the group is closed on every exit path including
/// early returns from a failed command.
pub struct LogGroup<'w, W: Write> {
    sink: &'w mut W,
}

impl<'w, W: Write> LogGroup<'w, W> {
    /// Opens a named log group on the sink.
    pub fn open(sink: &'w mut W, name: &str) -> Self {
        let _ = writeln!(sink, "::group::{}", escape_data(name));
        Self { sink }
    }
}

impl<W: Write> Drop for LogGroup<'_, W> {
    fn drop(&mut self) {
        let _ = writeln!(self.sink, "::endgroup::");
    }
}
