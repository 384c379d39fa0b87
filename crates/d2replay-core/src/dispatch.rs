//! Snapshot routing and run orchestration.
//!
//! [`Dispatcher`] owns the run state and routes each snapshot by entity
//! class: game rules updates go to the [`LifecycleTracker`], data spectator
//! updates to the [`Sampler`]. Any other class is ignored so richer streams
//! can be fed in unchanged. Once the match has ended every snapshot is a
//! no-op.
//!
//! [`run`] drives an [`EventSource`] through a dispatcher and hands back the
//! finished [`RunResult`], or the first fatal error.

use d2replay_types::{ClassKind, PropertyAccess};
use tracing::{debug, info};

use crate::config::ParseConfig;
use crate::error::{ReduceError, RunError};
use crate::lifecycle::LifecycleTracker;
use crate::result::RunResult;
use crate::sampler::Sampler;
use crate::series::NetWorthSeries;
use crate::source::EventSource;

/// The mutable state of one run.
///
/// Both consumers receive an explicit handle to the parts they need; there
/// is no shared global state.
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    /// Match lifecycle derived from game rules updates.
    pub lifecycle: LifecycleTracker,
    /// Sample cursor.
    pub sampler: Sampler,
    /// Accumulated net worth samples.
    pub series: NetWorthSeries,
    /// Number of snapshots dispatched so far.
    pub snapshots_seen: u64,
}

impl RunState {
    /// Create empty run state sampling every `interval` game seconds.
    pub fn new(interval: i32) -> Self {
        Self {
            lifecycle: LifecycleTracker::new(),
            sampler: Sampler::new(interval),
            series: NetWorthSeries::new(),
            snapshots_seen: 0,
        }
    }
}

/// Routes snapshots to the lifecycle tracker and the sampler.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatcher {
    state: RunState,
}

impl Dispatcher {
    /// Create a dispatcher for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidInterval`] if the sample interval is
    /// unusable.
    ///
    /// [`ConfigError::InvalidInterval`]: crate::config::ConfigError::InvalidInterval
    pub fn new(config: &ParseConfig) -> Result<Self, crate::config::ConfigError> {
        Ok(Self {
            state: RunState::new(config.sample_interval()?),
        })
    }

    /// Route one snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError`] if the snapshot lacks a property required by
    /// the current match phase. The run must be abandoned in that case.
    pub fn dispatch(&mut self, snapshot: &dyn PropertyAccess) -> Result<(), ReduceError> {
        self.state.snapshots_seen = self.state.snapshots_seen.saturating_add(1);

        if self.state.lifecycle.is_ended() {
            return Ok(());
        }

        match ClassKind::from_class_name(snapshot.class_name()) {
            Some(ClassKind::GameRules) => {
                self.state.lifecycle.observe(snapshot)?;
            }
            Some(ClassKind::DataSpectator) => {
                let state = &mut self.state;
                state
                    .sampler
                    .observe(&state.lifecycle, snapshot, &mut state.series)?;
            }
            None => {}
        }
        Ok(())
    }

    /// Current run state.
    pub const fn state(&self) -> &RunState {
        &self.state
    }

    /// Whether the match has ended and further snapshots will be ignored.
    pub fn is_finished(&self) -> bool {
        self.state.lifecycle.is_ended()
    }

    /// Consume the dispatcher and produce the run result.
    pub fn finish(self) -> RunResult {
        let RunState {
            lifecycle,
            series,
            snapshots_seen,
            ..
        } = self.state;
        RunResult {
            phase: lifecycle.phase(),
            winner: lifecycle.winner(),
            start_time: lifecycle.start_time(),
            end_time: lifecycle.end_time(),
            final_game_time: lifecycle.game_time(),
            net_worth: series,
            snapshots_seen,
        }
    }
}

/// Reduce a whole event stream into a [`RunResult`].
///
/// The source is drained even after the match has ended; those snapshots
/// are counted but otherwise ignored.
///
/// # Errors
///
/// Returns [`RunError::Config`] for an unusable configuration,
/// [`RunError::Reduce`] on the first schema violation, or
/// [`RunError::Source`] if the stream cannot be read. No partial result is
/// returned.
pub fn run(source: &mut dyn EventSource, config: &ParseConfig) -> Result<RunResult, RunError> {
    let mut dispatcher = Dispatcher::new(config)?;
    info!(
        interval_seconds = dispatcher.state().sampler.interval(),
        "reducing replay events"
    );

    source.for_each_snapshot(&mut |snapshot| {
        dispatcher.dispatch(snapshot)?;
        Ok(())
    })?;

    debug!(snapshots = dispatcher.state().snapshots_seen, "event stream exhausted");
    Ok(dispatcher.finish())
}
