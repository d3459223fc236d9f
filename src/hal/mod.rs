//! Hardware abstraction for solar-tracker.
//!
//! The tracker owns its hardware through three small traits: a step driver
//! per axis, a differential voltage sensor, and a monotonic clock. Timed
//! pacing uses embedded-hal's `DelayNs` directly.

mod clock;
mod motor;
mod sensor;

pub use clock::Clock;
pub use motor::{Axis, Direction, PhaseSequencer, StepDriver, StepPhase};
pub use sensor::VoltageSensor;

#[cfg(feature = "std")]
pub use clock::StdClock;
