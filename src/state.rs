//! Shared holder for the most recent orientation

use std::sync::{PoisonError, RwLock};

use nalgebra::UnitQuaternion;

use crate::attitude::Orientation;

/// Orientation together with the number of publishes that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationSnapshot {
    pub orientation: Orientation,
    /// Zero until the first publish, then incremented on every publish
    pub sequence: u64,
}

impl Default for OrientationSnapshot {
    fn default() -> Self {
        Self {
            orientation: UnitQuaternion::identity(),
            sequence: 0,
        }
    }
}

/// Current orientation shared between an attitude producer and acceleration consumers
///
/// Each [`publish`](Self::publish) replaces the whole snapshot in one step, so
/// readers on other threads always see an orientation that was published as a
/// unit, never a mix of two. Share it across threads with `Arc`.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use attitude_isolator::{OrientationState, convert};
///
/// let state = Arc::new(OrientationState::new());
/// let writer = Arc::clone(&state);
/// std::thread::spawn(move || {
///     writer.publish(convert(0, 0, 9_000_000));
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(state.sequence(), 1);
/// ```
#[derive(Debug, Default)]
pub struct OrientationState {
    current: RwLock<OrientationSnapshot>,
}

impl OrientationState {
    /// Create a holder initialised to the identity orientation
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current orientation, returning the new sequence number
    pub fn publish(&self, orientation: Orientation) -> u64 {
        // The guarded value is Copy and only ever assigned whole, so a
        // poisoned lock still holds a consistent snapshot.
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let sequence = current.sequence.wrapping_add(1);
        *current = OrientationSnapshot {
            orientation,
            sequence,
        };
        drop(current);

        tracing::trace!(sequence, "orientation published");
        sequence
    }

    /// Copy of the latest published orientation and its sequence number
    pub fn snapshot(&self) -> OrientationSnapshot {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn orientation(&self) -> Orientation {
        self.snapshot().orientation
    }

    pub fn sequence(&self) -> u64 {
        self.snapshot().sequence
    }
}
