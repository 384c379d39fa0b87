//! Replay event reduction for d2replay.
//!
//! This crate turns a stream of decoded entity updates into a per-player
//! net worth time series plus match outcome metadata. It owns the small
//! state machine at the heart of the tool:
//!
//! ```text
//! EventSource --> Dispatcher --+--> LifecycleTracker (game rules)
//!                              +--> Sampler          (data spectator)
//!                                        |
//!                                        v
//!                                   RunResult --> export
//! ```
//!
//! # Modules
//!
//! - [`config`] -- [`ParseConfig`] and its YAML loader.
//! - [`dispatch`] -- [`Dispatcher`], [`RunState`], and the [`run`] driver.
//! - [`dump`] -- Raw property dump that bypasses reduction.
//! - [`error`] -- [`ReduceError`], [`SourceError`], and [`RunError`].
//! - [`lifecycle`] -- Match phase tracking from game rules updates.
//! - [`result`] -- [`RunResult`] and the time series export document.
//! - [`sampler`] -- Interval-gated net worth sampling.
//! - [`series`] -- [`NetWorthSeries`], the roster-wide sample history.
//! - [`source`] -- [`EventSource`] trait and [`VecSource`].
//!
//! Processing is single-threaded and synchronous. Snapshots are borrowed
//! for one dispatch call at a time and never retained.
//!
//! [`ParseConfig`]: config::ParseConfig
//! [`Dispatcher`]: dispatch::Dispatcher
//! [`RunState`]: dispatch::RunState
//! [`run`]: dispatch::run
//! [`ReduceError`]: error::ReduceError
//! [`SourceError`]: error::SourceError
//! [`RunError`]: error::RunError
//! [`RunResult`]: result::RunResult
//! [`NetWorthSeries`]: series::NetWorthSeries
//! [`EventSource`]: source::EventSource
//! [`VecSource`]: source::VecSource

pub mod config;
pub mod dispatch;
pub mod dump;
pub mod error;
pub mod lifecycle;
pub mod result;
pub mod sampler;
pub mod series;
pub mod source;
