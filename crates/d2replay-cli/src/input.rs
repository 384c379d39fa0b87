//! Decoded event input.
//!
//! The binary replay decoder runs upstream and writes one JSON object per
//! entity update:
//!
//! ```text
//! {"class":"CDOTAGamerulesProxy","properties":{"CDOTAGamerules.m_fGameTime":{"f32":612.4}}}
//! ```
//!
//! [`JsonLinesSource`] replays such a stream as an [`EventSource`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use d2replay_core::error::{RunError, SourceError};
use d2replay_core::source::{EventSource, SnapshotSink};
use d2replay_types::{EntitySnapshot, PropertyAccess};

use crate::error::CliError;

/// Open the input stream: the named file, or stdin for `None` / `-`.
///
/// # Errors
///
/// Returns [`CliError::OpenInput`] if the file cannot be opened.
pub fn open(path: Option<&Path>) -> Result<Box<dyn BufRead>, CliError> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(p) if p.as_os_str() == "-" => Ok(Box::new(io::stdin().lock())),
        Some(p) => {
            let file = File::open(p).map_err(|source| CliError::OpenInput {
                path: p.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// An [`EventSource`] reading one JSON-encoded snapshot per line.
///
/// Blank lines are skipped. Each line is decoded into a fresh snapshot that
/// is dropped as soon as the sink returns.
pub struct JsonLinesSource<R> {
    reader: R,
}

impl<R: BufRead> JsonLinesSource<R> {
    /// Wrap a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> EventSource for JsonLinesSource<R> {
    fn for_each_snapshot(&mut self, sink: &mut SnapshotSink<'_>) -> Result<(), RunError> {
        let mut buf = String::new();
        let mut line: u64 = 0;
        loop {
            buf.clear();
            line = line.saturating_add(1);
            let read = self
                .reader
                .read_line(&mut buf)
                .map_err(|source| SourceError::Read { line, source })?;
            if read == 0 {
                return Ok(());
            }
            let text = buf.trim();
            if text.is_empty() {
                continue;
            }
            let snapshot: EntitySnapshot =
                serde_json::from_str(text).map_err(|e| SourceError::Decode {
                    line,
                    message: e.to_string(),
                })?;
            let view: &dyn PropertyAccess = &snapshot;
            sink(view)?;
        }
    }
}
