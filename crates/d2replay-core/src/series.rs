//! Per-player net worth series.

use d2replay_types::ROSTER_SIZE;
use serde::Serialize;

/// One net worth reading for every roster slot, in roster order.
pub type RosterSample = [i32; ROSTER_SIZE];

/// Append-only net worth history for the whole roster.
///
/// Samples are written a full roster at a time, so every slot always holds
/// the same number of values and index `n` of each slot belongs to the same
/// moment in the match.
///
/// Serializes as an array of [`ROSTER_SIZE`] integer arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NetWorthSeries {
    slots: [Vec<i32>; ROSTER_SIZE],
}

impl NetWorthSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one reading per slot.
    pub fn push(&mut self, sample: RosterSample) {
        for (slot, value) in self.slots.iter_mut().zip(sample) {
            slot.push(value);
        }
    }

    /// Number of samples taken.
    pub fn len(&self) -> usize {
        self.slots.first().map_or(0, Vec::len)
    }

    /// Whether no sample has been taken yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// History of one roster slot, or `None` if `index` is out of range.
    pub fn slot(&self, index: usize) -> Option<&[i32]> {
        self.slots.get(index).map(Vec::as_slice)
    }

    /// All slot histories in roster order.
    pub const fn slots(&self) -> &[Vec<i32>; ROSTER_SIZE] {
        &self.slots
    }

    /// The most recent sample, if any.
    pub fn latest(&self) -> Option<RosterSample> {
        let mut sample = [0; ROSTER_SIZE];
        for (value, slot) in sample.iter_mut().zip(&self.slots) {
            *value = *slot.last()?;
        }
        Some(sample)
    }
}
