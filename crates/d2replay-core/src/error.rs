//! Error types for replay reduction.
//!
//! Reduction has exactly one failure class of its own: a property the
//! current match phase requires is absent. Everything else (unknown
//! classes, samples that are not yet due) is silently skipped. Event
//! sources and output sinks contribute their own failures, and
//! [`RunError`] gathers all of them at the orchestration boundary.

/// A snapshot did not match the schema the reducer expects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReduceError {
    /// A property required by the current match phase was absent.
    #[error("schema violation: {class} update is missing required property {key}")]
    MissingProperty {
        /// Class name of the offending snapshot.
        class: String,
        /// The property key that was expected.
        key: String,
    },
}

impl ReduceError {
    /// Build a [`ReduceError::MissingProperty`].
    pub fn missing(class: &str, key: &str) -> Self {
        Self::MissingProperty {
            class: class.to_owned(),
            key: key.to_owned(),
        }
    }
}

/// Failures raised by an event source while producing snapshots.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The underlying reader failed.
    #[error("failed to read event {line}: {source}")]
    Read {
        /// 1-based position of the event in the stream.
        line: u64,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An event could not be decoded into a snapshot.
    #[error("failed to decode event {line}: {message}")]
    Decode {
        /// 1-based position of the event in the stream.
        line: u64,
        /// Description of the decode failure.
        message: String,
    },
}

/// Top-level error for a reduction or dump run.
///
/// Any of these aborts the run. No partial result is produced.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The snapshot stream violated the expected schema.
    #[error("reduce error: {source}")]
    Reduce {
        /// The underlying schema violation.
        #[from]
        source: ReduceError,
    },

    /// The event source failed.
    #[error("source error: {source}")]
    Source {
        /// The underlying source failure.
        #[from]
        source: SourceError,
    },

    /// The run configuration was rejected.
    #[error("config error: {source}")]
    Config {
        /// The underlying configuration error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// Writing output failed.
    #[error("output error: {source}")]
    Output {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
