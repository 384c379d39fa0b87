//! Interval sampling of roster net worth.
//!
//! The data spectator entity updates far more often than anyone wants a
//! data point. The sampler keeps a cursor on the game clock and only takes a
//! reading once the clock has reached it; each accepted sample pushes the
//! cursor `interval` seconds past the current game time.
//!
//! The cursor advances *before* the roster is read, so one malformed update
//! can never cause a retry on every following tick.

use d2replay_types::schema::net_worth_key;
use d2replay_types::{PropertyAccess, ROSTER_SIZE};
use tracing::{debug, trace};

use crate::error::ReduceError;
use crate::lifecycle::{LifecycleTracker, MatchPhase};
use crate::series::{NetWorthSeries, RosterSample};

/// Initial cursor value, below any valid game time.
///
/// With this sentinel the first spectator update once the match clock reaches
/// zero is sampled. Updates during the pre-game countdown are not.
pub const CURSOR_SENTINEL: i32 = -1;

/// Decides when to take a net worth sample and takes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sampler {
    interval: i32,
    next_threshold: i32,
}

impl Sampler {
    /// Create a sampler taking at most one sample per `interval` game
    /// seconds.
    pub const fn new(interval: i32) -> Self {
        Self {
            interval,
            next_threshold: CURSOR_SENTINEL,
        }
    }

    /// Configured spacing between samples.
    pub const fn interval(&self) -> i32 {
        self.interval
    }

    /// Game time at or after which the next sample will be taken.
    pub const fn next_threshold(&self) -> i32 {
        self.next_threshold
    }

    /// Offer one data spectator update to the sampler.
    ///
    /// Returns `Ok(true)` if a sample was appended to `series`, `Ok(false)`
    /// if the update was skipped because the match is not in progress, the
    /// pre-game countdown is still running, or the next sample is not yet
    /// due.
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::MissingProperty`] if any roster slot's net
    /// worth is absent. Nothing is appended in that case.
    pub fn observe(
        &mut self,
        lifecycle: &LifecycleTracker,
        spectator: &dyn PropertyAccess,
        series: &mut NetWorthSeries,
    ) -> Result<bool, ReduceError> {
        if lifecycle.phase() != MatchPhase::InProgress {
            trace!(phase = ?lifecycle.phase(), "spectator update outside match");
            return Ok(false);
        }

        let game_time = lifecycle.game_time();
        if game_time < 0 {
            trace!(game_time, "spectator update during countdown");
            return Ok(false);
        }
        if game_time < self.next_threshold {
            trace!(game_time, next = self.next_threshold, "sample not yet due");
            return Ok(false);
        }

        self.next_threshold = game_time.saturating_add(self.interval);

        let sample = read_roster(spectator)?;
        series.push(sample);
        debug!(
            game_time,
            samples = series.len(),
            next = self.next_threshold,
            "net worth sampled"
        );
        Ok(true)
    }
}

/// Read every roster slot's net worth, failing on the first absent slot.
fn read_roster(spectator: &dyn PropertyAccess) -> Result<RosterSample, ReduceError> {
    let mut sample = [0; ROSTER_SIZE];
    for (slot, value) in sample.iter_mut().enumerate() {
        let key = net_worth_key(slot);
        *value = spectator
            .fetch_i32(&key)
            .ok_or_else(|| ReduceError::missing(spectator.class_name(), &key))?;
    }
    Ok(sample)
}
