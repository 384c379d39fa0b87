//! Error types for the command-line front end.

use std::path::PathBuf;

/// Errors raised while wiring input, configuration, and output together.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("unable to open input {path}: {source}")]
    OpenInput {
        /// Path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("unable to write output {path}: {source}")]
    WriteOutput {
        /// Destination that failed (`-` for stdout).
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The export document could not be serialized.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The configuration file or flags were rejected.
    #[error("config error: {0}")]
    Config(#[from] d2replay_core::config::ConfigError),
}
