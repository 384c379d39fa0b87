//! Event source trait and in-memory implementation.
//!
//! The replay decoder is an external collaborator. It pushes decoded entity
//! updates, one at a time and in stream order, into a single callback. The
//! [`EventSource`] trait captures that contract. It could be backed by a
//! live decoder, a JSON-lines file, or a test fixture.

use d2replay_types::{EntitySnapshot, PropertyAccess};

use crate::error::RunError;

/// Callback invoked once per decoded entity update.
///
/// The snapshot is only borrowed for the duration of the call. Returning an
/// error stops the stream.
pub type SnapshotSink<'a> = dyn FnMut(&dyn PropertyAccess) -> Result<(), RunError> + 'a;

/// A single-pass, push-based stream of entity updates.
pub trait EventSource {
    /// Push every remaining snapshot into `sink`, in order.
    ///
    /// Stops at the first error, whether raised by the source itself or
    /// returned by `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Source`] if the stream cannot be read or decoded,
    /// or whatever error `sink` returned.
    fn for_each_snapshot(&mut self, sink: &mut SnapshotSink<'_>) -> Result<(), RunError>;
}

/// An event source replaying snapshots held in memory.
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    snapshots: Vec<EntitySnapshot>,
}

impl VecSource {
    /// Create a source that replays `snapshots` in order.
    pub const fn new(snapshots: Vec<EntitySnapshot>) -> Self {
        Self { snapshots }
    }

    /// Number of snapshots the source holds.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the source holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl FromIterator<EntitySnapshot> for VecSource {
    fn from_iter<I: IntoIterator<Item = EntitySnapshot>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl EventSource for VecSource {
    fn for_each_snapshot(&mut self, sink: &mut SnapshotSink<'_>) -> Result<(), RunError> {
        for snapshot in &self.snapshots {
            let view: &dyn PropertyAccess = snapshot;
            sink(view)?;
        }
        Ok(())
    }
}
