//! Run configuration.
//!
//! A run is configured by a small YAML document (or, more commonly, by the
//! command-line front end filling in the same struct). Every field has a
//! default, so an empty document is a valid configuration.
//!
//! ```yaml
//! interval_seconds: 30
//! dump: false
//! dump_class: CDOTAGamerulesProxy
//! ```

use std::path::Path;

use serde::Deserialize;

/// Default spacing between net worth samples, in game seconds.
pub const DEFAULT_INTERVAL_SECONDS: u32 = 60;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The sample interval is zero or does not fit the game clock.
    #[error("invalid sample interval {value}s: must be between 1 and {max}", max = i32::MAX)]
    InvalidInterval {
        /// The rejected interval.
        value: u32,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Configuration for a single replay run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Minimum game seconds between two net worth samples.
    pub interval_seconds: u32,

    /// Bypass reduction and print every property of every snapshot.
    pub dump: bool,

    /// Restrict dump output to one entity class.
    pub dump_class: Option<String>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            interval_seconds: DEFAULT_INTERVAL_SECONDS,
            dump: false,
            dump_class: None,
        }
    }
}

impl ParseConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::InvalidInterval`] if validation fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::InvalidInterval`] if validation fails.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map.
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidInterval`] if the interval is zero or
    /// exceeds the range of the game clock.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sample_interval().map(|_| ())
    }

    /// The sample interval in the game clock's integer representation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidInterval`] if the interval is zero or
    /// exceeds `i32::MAX`.
    pub fn sample_interval(&self) -> Result<i32, ConfigError> {
        let invalid = || ConfigError::InvalidInterval {
            value: self.interval_seconds,
        };
        if self.interval_seconds == 0 {
            return Err(invalid());
        }
        i32::try_from(self.interval_seconds).map_err(|_err| invalid())
    }
}
