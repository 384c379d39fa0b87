//! Export writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use d2replay_core::result::RunResult;

use crate::error::CliError;

/// Serialize the run's export document as one JSON line to `path`, or to
/// stdout when `path` is `None`.
///
/// # Errors
///
/// Returns [`CliError::WriteOutput`] if the destination cannot be written,
/// or [`CliError::Serde`] if serialization fails.
pub fn write_export(result: &RunResult, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => {
            let file = File::create(p).map_err(|source| CliError::WriteOutput {
                path: p.to_path_buf(),
                source,
            })?;
            write_to(result, BufWriter::new(file), p)
        }
        None => write_to(result, io::stdout().lock(), Path::new("-")),
    }
}

fn write_to<W: Write>(result: &RunResult, mut out: W, path: &Path) -> Result<(), CliError> {
    let io_err = |source: io::Error| CliError::WriteOutput {
        path: PathBuf::from(path),
        source,
    };
    serde_json::to_writer(&mut out, &result.export())?;
    out.write_all(b"\n").map_err(io_err)?;
    out.flush().map_err(io_err)
}
