//! Step driver abstraction.
//!
//! The underlying hardware exposes two forward-step and two backward-step
//! primitives per motor, reflecting a half-step coil interleave: successive
//! single steps must alternate between the two primitives or the motor
//! stalls mid-sequence. That alternation is modeled here as a [`StepPhase`]
//! passed with every step, with [`PhaseSequencer`] producing the strict
//! A, B, A, B... ordering.

/// One of the two independently controlled mechanical degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Azimuthal rotation of the whole assembly.
    Rotation,
    /// Elevation of the cell between ground level and zenith.
    Pitch,
}

impl Axis {
    /// Axis name for status lines.
    pub fn name(self) -> &'static str {
        match self {
            Axis::Rotation => "rotation",
            Axis::Pitch => "pitch",
        }
    }
}

/// Direction of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Forward, the scan direction. Increments the position count.
    Forward,
    /// Backward, the retreat direction. Decrements the position count.
    Backward,
}

/// Half-step phase selecting which of the two stepping primitives fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepPhase {
    /// First primitive (odd-numbered steps of a walk).
    #[default]
    A,
    /// Second primitive (even-numbered steps of a walk).
    B,
}

impl StepPhase {
    /// The other phase.
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            StepPhase::A => StepPhase::B,
            StepPhase::B => StepPhase::A,
        }
    }
}

/// Deterministic phase source for a walk of single steps.
///
/// Starts at [`StepPhase::A`] and toggles on every call, so step 1 of a walk
/// uses A, step 2 uses B, and so on. Each scan or retreat starts a fresh
/// sequencer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseSequencer {
    next: StepPhase,
}

impl PhaseSequencer {
    /// Create a sequencer positioned before step 1.
    #[inline]
    pub fn new() -> Self {
        Self {
            next: StepPhase::A,
        }
    }

    /// Phase for the next step.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> StepPhase {
        let phase = self.next;
        self.next = phase.toggle();
        phase
    }
}

/// A stepper motor driver for one axis.
///
/// Implementations own their inter-phase timing (the torque/speed safety
/// delay between coil transitions); callers only sequence steps and phases.
pub trait StepDriver {
    /// Driver-specific error type.
    type Error;

    /// Move exactly one single step in the given direction using the given
    /// half-step primitive.
    fn step(&mut self, direction: Direction, phase: StepPhase)
        -> core::result::Result<(), Self::Error>;

    /// Coarse backward move of `units` double-steps (2 single steps each).
    ///
    /// Used for homing and safety clamps. The default implementation walks
    /// the steps through [`StepDriver::step`] with alternating phases;
    /// hardware with a native multi-step primitive can override it.
    fn backward_units(&mut self, units: u32) -> core::result::Result<(), Self::Error> {
        let mut phases = PhaseSequencer::new();
        for _ in 0..units {
            self.step(Direction::Backward, phases.next())?;
            self.step(Direction::Backward, phases.next())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingDriver {
        calls: std::vec::Vec<(Direction, StepPhase)>,
    }

    impl StepDriver for RecordingDriver {
        type Error = core::convert::Infallible;

        fn step(
            &mut self,
            direction: Direction,
            phase: StepPhase,
        ) -> core::result::Result<(), Self::Error> {
            self.calls.push((direction, phase));
            Ok(())
        }
    }

    #[test]
    fn test_phase_sequencer_alternates() {
        let mut phases = PhaseSequencer::new();
        assert_eq!(phases.next(), StepPhase::A);
        assert_eq!(phases.next(), StepPhase::B);
        assert_eq!(phases.next(), StepPhase::A);
        assert_eq!(phases.next(), StepPhase::B);
    }

    #[test]
    fn test_backward_units_is_two_steps_each() {
        let mut driver = RecordingDriver::default();
        driver.backward_units(3).unwrap();

        assert_eq!(driver.calls.len(), 6);
        for (i, (direction, phase)) in driver.calls.iter().enumerate() {
            assert_eq!(*direction, Direction::Backward);
            let expected = if i % 2 == 0 { StepPhase::A } else { StepPhase::B };
            assert_eq!(*phase, expected);
        }
    }

    #[test]
    fn test_axis_names() {
        assert_eq!(Axis::Rotation.name(), "rotation");
        assert_eq!(Axis::Pitch.name(), "pitch");
    }
}
