//! Command-line flags.
//!
//! Every flag has an environment variable fallback so the tool can be
//! driven from scripts without argument plumbing. An optional YAML file
//! provides the base configuration; flags given explicitly override it.

use std::path::PathBuf;

use clap::Parser;
use d2replay_core::config::ParseConfig;

use crate::error::CliError;

/// A Dota 2 replay parser: reduces decoded entity updates to a per-player
/// net worth time series.
#[derive(Debug, Parser)]
#[command(name = "d2replayparse", version, about, long_about = None)]
pub struct Cli {
    /// Decoded event stream (JSON lines). Reads stdin when absent or `-`.
    pub input: Option<PathBuf>,

    /// Time series recording interval in seconds [default: 60]
    #[arg(long, env = "D2REPLAY_INTERVAL")]
    pub interval: Option<u32>,

    /// Dump contents without parsing
    #[arg(long, env = "D2REPLAY_DUMP")]
    pub dump: bool,

    /// Only dump snapshots of this entity class
    #[arg(long, value_name = "CLASS")]
    pub dump_class: Option<String>,

    /// YAML configuration file
    #[arg(long, env = "D2REPLAY_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the export here instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Build the run configuration: YAML file first, then flags on top.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] if the file cannot be loaded or the
    /// resulting configuration is invalid.
    pub fn resolve(&self) -> Result<ParseConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => ParseConfig::from_file(path)?,
            None => ParseConfig::default(),
        };

        if let Some(interval) = self.interval {
            config.interval_seconds = interval;
        }
        if self.dump {
            config.dump = true;
        }
        if let Some(class) = &self.dump_class {
            config.dump_class = Some(class.clone());
        }

        config.validate()?;
        Ok(config)
    }
}
