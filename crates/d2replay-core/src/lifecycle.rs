//! Match lifecycle tracking.
//!
//! The game rules entity is the single source of truth for where the match
//! stands. Its updates move the tracker through three phases:
//!
//! ```text
//! NotStarted --(start time appears)--> InProgress --(winner appears)--> Ended
//! ```
//!
//! `Ended` is terminal. While in progress, every rules update carries the
//! game clock, from which the elapsed match time is derived.

use d2replay_types::PropertyAccess;
use d2replay_types::schema::{GAME_END_TIME, GAME_START_TIME, GAME_TIME, GAME_WINNER};
use tracing::{info, trace, warn};

use crate::error::ReduceError;

/// Where the match currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MatchPhase {
    /// No start time has been seen yet (picks, pre-game).
    #[default]
    NotStarted,
    /// The match clock is running.
    InProgress,
    /// A winner has been declared. Nothing changes after this.
    Ended,
}

/// Lifecycle state derived from the game rules entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifecycleTracker {
    phase: MatchPhase,
    start_time: f32,
    end_time: f32,
    /// Whole seconds since the match started. Negative before the horn.
    game_time: i32,
    winner: i32,
}

impl LifecycleTracker {
    /// Create a tracker in [`MatchPhase::NotStarted`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one game rules update and return the resulting phase.
    ///
    /// Updates before the start time appears are ignored, as is everything
    /// after the match has ended. The state is only modified once all the
    /// properties this update needs have been read.
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::MissingProperty`] if a winner is present
    /// without an end time, or if an in-progress update lacks the game clock.
    pub fn observe(&mut self, rules: &dyn PropertyAccess) -> Result<MatchPhase, ReduceError> {
        let start_time = match self.phase {
            MatchPhase::Ended => return Ok(MatchPhase::Ended),
            MatchPhase::InProgress => self.start_time,
            MatchPhase::NotStarted => {
                let Some(start_time) = rules.fetch_f32(GAME_START_TIME) else {
                    trace!("rules update before match start");
                    return Ok(MatchPhase::NotStarted);
                };
                start_time
            }
        };

        if let Some(winner) = rules.fetch_i32(GAME_WINNER) {
            let end_time = require_f32(rules, GAME_END_TIME)?;
            self.mark_started(start_time);
            self.end_time = end_time;
            self.winner = winner;
            self.phase = MatchPhase::Ended;
            info!(
                winner,
                end_time,
                duration = self.end_time - self.start_time,
                "match ended"
            );
            return Ok(self.phase);
        }

        let now = require_f32(rules, GAME_TIME)?;
        let was_running = self.phase == MatchPhase::InProgress;
        self.mark_started(start_time);
        let elapsed = elapsed_seconds(now, self.start_time);
        if was_running && elapsed < self.game_time {
            warn!(
                previous = self.game_time,
                reported = elapsed,
                "game clock went backwards"
            );
        }
        // Negative during the pre-game countdown.
        self.game_time = elapsed;
        Ok(self.phase)
    }

    fn mark_started(&mut self, start_time: f32) {
        if self.phase == MatchPhase::NotStarted {
            self.phase = MatchPhase::InProgress;
            self.start_time = start_time;
            info!(start_time, "match started");
        }
    }

    /// Current phase.
    pub const fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Whether a start time has been seen.
    pub fn is_started(&self) -> bool {
        self.phase != MatchPhase::NotStarted
    }

    /// Whether a winner has been declared.
    pub fn is_ended(&self) -> bool {
        self.phase == MatchPhase::Ended
    }

    /// Whole seconds elapsed since the match started, as of the last
    /// in-progress update. Negative while the pre-game countdown runs.
    pub const fn game_time(&self) -> i32 {
        self.game_time
    }

    /// Match start time, once started.
    pub fn start_time(&self) -> Option<f32> {
        self.is_started().then_some(self.start_time)
    }

    /// Match end time, once ended.
    pub fn end_time(&self) -> Option<f32> {
        self.is_ended().then_some(self.end_time)
    }

    /// Winning team code, once ended.
    pub fn winner(&self) -> Option<i32> {
        self.is_ended().then_some(self.winner)
    }

    /// `end_time - start_time`, once ended.
    pub fn duration(&self) -> Option<f32> {
        self.is_ended().then(|| self.end_time - self.start_time)
    }
}

fn require_f32(rules: &dyn PropertyAccess, key: &str) -> Result<f32, ReduceError> {
    rules
        .fetch_f32(key)
        .ok_or_else(|| ReduceError::missing(rules.class_name(), key))
}

/// Whole seconds between `start` and `now`, rounded down.
///
/// Out-of-range values saturate at the `i32` bounds.
#[allow(clippy::cast_possible_truncation)]
fn elapsed_seconds(now: f32, start: f32) -> i32 {
    (now - start).floor() as i32
}
