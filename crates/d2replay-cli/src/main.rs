//! `d2replayparse`: Dota 2 replay net worth extractor.
//!
//! Reads a decoded entity update stream (JSON lines, from a file or stdin),
//! tracks the match lifecycle, samples every player's net worth at a fixed
//! game-time interval, and prints the resulting time series as JSON.
//!
//! # Architecture
//!
//! ```text
//! JSON lines --> JsonLinesSource --> Dispatcher --> RunResult --> stdout
//!                                 \-> PropertyDump (--dump) --> stdout
//! ```
//!
//! Logs go to stderr so stdout carries only the export (or the dump).

mod config;
mod error;
mod input;
mod output;

use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;
use d2replay_core::{dispatch, dump};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Cli;
use crate::input::JsonLinesSource;

/// Application entry point.
///
/// Initializes logging, resolves configuration, and either dumps the raw
/// stream or reduces it and writes the export.
///
/// # Errors
///
/// Returns an error if the input cannot be opened, the stream violates the
/// expected schema, or the output cannot be written. No export is written
/// on error.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve().context("invalid configuration")?;
    let input_name = cli
        .input
        .as_ref()
        .map_or_else(|| String::from("-"), |p| p.display().to_string());
    info!(
        input = %input_name,
        interval_seconds = config.interval_seconds,
        dump = config.dump,
        "d2replayparse starting"
    );

    let reader = input::open(cli.input.as_deref())?;
    let mut source = JsonLinesSource::new(reader);

    if config.dump {
        let out = BufWriter::new(io::stdout().lock());
        dump::dump_source(&mut source, out, config.dump_class.clone())
            .context("property dump failed")?;
        return Ok(());
    }

    let result = dispatch::run(&mut source, &config).context("replay reduction aborted")?;
    result.log_summary();
    output::write_export(&result, cli.output.as_deref()).context("failed to write export")?;

    Ok(())
}
