//! Raw property dump.
//!
//! A debugging passthrough for learning the replay schema: instead of
//! reducing the stream, print every property of every snapshot, one line
//! each. Lifecycle tracking and sampling are bypassed entirely.

use std::io::Write;

use d2replay_types::{PropertyAccess, PropertyValue};
use tracing::info;

use crate::error::RunError;
use crate::source::EventSource;

/// Writes snapshots as `ClassName: <class>\tK: <key>\tV: <value>` lines.
#[derive(Debug)]
pub struct PropertyDump<W: Write> {
    out: W,
    class_filter: Option<String>,
    lines: u64,
}

impl<W: Write> PropertyDump<W> {
    /// Dump to `out`, optionally keeping only snapshots of `class_filter`.
    pub const fn new(out: W, class_filter: Option<String>) -> Self {
        Self {
            out,
            class_filter,
            lines: 0,
        }
    }

    /// Write every property of one snapshot.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the underlying writer.
    pub fn write_snapshot(&mut self, snapshot: &dyn PropertyAccess) -> std::io::Result<()> {
        let class = snapshot.class_name();
        if self
            .class_filter
            .as_deref()
            .is_some_and(|wanted| wanted != class)
        {
            return Ok(());
        }

        let mut result: std::io::Result<()> = Ok(());
        let mut written: u64 = 0;
        snapshot.for_each_property(&mut |key: &str, value: &PropertyValue| {
            if result.is_ok() {
                result = writeln!(self.out, "ClassName: {class}\tK: {key}\tV: {value}");
                written = written.saturating_add(1);
            }
        });
        self.lines = self.lines.saturating_add(written);
        result
    }

    /// Number of property lines written so far.
    pub const fn lines_written(&self) -> u64 {
        self.lines
    }

    /// Flush and return the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while flushing.
    pub fn finish(mut self) -> std::io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Dump an entire event stream to `out`. Returns the number of lines
/// written.
///
/// # Errors
///
/// Returns [`RunError::Source`] if the stream cannot be read, or
/// [`RunError::Output`] if writing fails.
pub fn dump_source<W: Write>(
    source: &mut dyn EventSource,
    out: W,
    class_filter: Option<String>,
) -> Result<u64, RunError> {
    let mut dump = PropertyDump::new(out, class_filter);
    source.for_each_snapshot(&mut |snapshot| {
        dump.write_snapshot(snapshot)?;
        Ok(())
    })?;
    let lines = dump.lines_written();
    dump.finish()?;
    info!(lines, "property dump complete");
    Ok(lines)
}
