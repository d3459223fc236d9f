//! Dead-reckoned position tracking for both axes.
//!
//! The signed step count per axis is the sole representation of physical
//! position. Invariant: the stored count always equals the net number of
//! forward-minus-backward single steps issued to that axis since process
//! start. Counts live only in memory and are lost on restart.

use crate::config::units::{Degrees, Steps};
use crate::hal::Axis;

/// Signed net step count per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionTracker {
    rotation: Steps,
    pitch: Steps,
}

impl PositionTracker {
    /// Both axes at the startup origin.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracker seeded at specific counts, e.g. from a prior snapshot.
    #[inline]
    pub fn at(rotation: Steps, pitch: Steps) -> Self {
        Self { rotation, pitch }
    }

    /// Current count for an axis.
    #[inline]
    pub fn get(&self, axis: Axis) -> Steps {
        match axis {
            Axis::Rotation => self.rotation,
            Axis::Pitch => self.pitch,
        }
    }

    /// Current position of an axis in degrees, for status lines.
    #[inline]
    pub fn degrees(&self, axis: Axis, degrees_per_step: f32) -> Degrees {
        self.get(axis).to_degrees(degrees_per_step)
    }

    /// Record `steps` single steps of forward motion.
    #[inline]
    pub fn advance(&mut self, axis: Axis, steps: i64) {
        let counter = self.counter_mut(axis);
        *counter = Steps(counter.0 + steps);
    }

    /// Record `steps` single steps of backward motion.
    #[inline]
    pub fn retreat(&mut self, axis: Axis, steps: i64) {
        let counter = self.counter_mut(axis);
        *counter = Steps(counter.0 - steps);
    }

    #[inline]
    fn counter_mut(&mut self, axis: Axis) -> &mut Steps {
        match axis {
            Axis::Rotation => &mut self.rotation,
            Axis::Pitch => &mut self.pitch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_retreat_round_trip() {
        let mut tracker = PositionTracker::new();

        tracker.advance(Axis::Rotation, 100);
        tracker.retreat(Axis::Rotation, 40);
        assert_eq!(tracker.get(Axis::Rotation).value(), 60);

        tracker.retreat(Axis::Rotation, 60);
        assert_eq!(tracker.get(Axis::Rotation).value(), 0);
    }

    #[test]
    fn test_axes_are_independent() {
        let mut tracker = PositionTracker::new();

        tracker.retreat(Axis::Pitch, 4);
        tracker.advance(Axis::Rotation, 100);

        assert_eq!(tracker.get(Axis::Pitch).value(), -4);
        assert_eq!(tracker.get(Axis::Rotation).value(), 100);
    }

    #[test]
    fn test_degrees_for_display() {
        let mut tracker = PositionTracker::new();
        tracker.advance(Axis::Rotation, 80);

        let degrees = tracker.degrees(Axis::Rotation, 3.6);
        assert!((degrees.value() - 288.0).abs() < 0.01);
    }

    #[test]
    fn test_seeded_tracker() {
        let tracker = PositionTracker::at(Steps(80), Steps(-6));
        assert_eq!(tracker.get(Axis::Rotation).value(), 80);
        assert_eq!(tracker.get(Axis::Pitch).value(), -6);
    }
}
