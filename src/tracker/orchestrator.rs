//! Scan orchestrator - the tracker's state machine.
//!
//! Sequences the initial sky acquisition, the passive tracking phase and
//! the periodic neighborhood re-scans, applying the pitch safety clamp
//! before every pitch re-scan. Strictly single-threaded and sequential:
//! both motors and the sensor are exclusively owned for the life of the
//! orchestrator, and every physical motion is paired with its position
//! count update inside the same call.

use core::time::Duration;

use embedded_hal::delay::DelayNs;

use crate::config::TrackerConfig;
use crate::error::{Error, MotorError, Result, SensorError};
use crate::hal::{Axis, Clock, StepDriver, VoltageSensor};
use crate::scan::{locate_peak, AxisScanner};

use super::position::PositionTracker;
use super::state::TrackerPhase;

/// Two-axis hill-climbing tracker.
///
/// Generic over:
/// - `R`: rotation axis step driver
/// - `P`: pitch axis step driver
/// - `S`: differential voltage sensor
/// - `D`: delay provider for all pacing
/// - `C`: monotonic clock driving the tracking cadence
pub struct Orchestrator<R, P, S, D, C>
where
    R: StepDriver,
    P: StepDriver,
    S: VoltageSensor,
    D: DelayNs,
    C: Clock,
{
    config: TrackerConfig,
    rotation: R,
    pitch: P,
    sensor: S,
    delay: D,
    clock: C,
    position: PositionTracker,
    phase: TrackerPhase,
}

impl<R, P, S, D, C> Orchestrator<R, P, S, D, C>
where
    R: StepDriver,
    P: StepDriver,
    S: VoltageSensor,
    D: DelayNs,
    C: Clock,
{
    /// Create an orchestrator with both axes at the startup origin.
    pub fn new(config: TrackerConfig, rotation: R, pitch: P, sensor: S, delay: D, clock: C) -> Self {
        Self::with_position(
            config,
            rotation,
            pitch,
            sensor,
            delay,
            clock,
            PositionTracker::new(),
        )
    }

    /// Create an orchestrator with a seeded position, e.g. restored from a
    /// snapshot taken by the caller after a previous run.
    #[allow(clippy::too_many_arguments)]
    pub fn with_position(
        config: TrackerConfig,
        rotation: R,
        pitch: P,
        sensor: S,
        delay: D,
        clock: C,
        position: PositionTracker,
    ) -> Self {
        Self {
            config,
            rotation,
            pitch,
            sensor,
            delay,
            clock,
            position,
            phase: TrackerPhase::InitRotationScan,
        }
    }

    /// Current dead-reckoned position.
    #[inline]
    pub fn position(&self) -> &PositionTracker {
        &self.position
    }

    /// Current state-machine phase.
    #[inline]
    pub fn phase(&self) -> TrackerPhase {
        self.phase
    }

    /// The configuration in effect.
    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Run the tracker until a hardware fault.
    ///
    /// Performs the initial acquisition, then alternates tracking phases
    /// with re-scans forever. Only an `Err` returns; there is no graceful
    /// shutdown path, the process is expected to be terminated externally.
    pub fn run(&mut self) -> Result<()> {
        self.initial_acquisition()?;

        loop {
            self.track()?;
            self.rescan()?;
        }
    }

    /// Initial sky acquisition: full rotation scan, then pitch scan.
    ///
    /// Homes the pitch down from zenith first so the rotation scan runs at
    /// a sensible elevation, then lowers it further for its own scan.
    pub fn initial_acquisition(&mut self) -> Result<()> {
        self.phase = TrackerPhase::InitRotationScan;
        log::info!("starting rotation scan");

        self.pitch_backward_units(self.config.scan.initial_pitch_homing_units)?;
        self.scan_rotation(self.config.scan.initial_rotation_width)?;

        self.phase = TrackerPhase::InitPitchScan;
        log::info!("starting pitch scan");

        self.pitch_backward_units(self.config.scan.pitch_lowering_units)?;
        self.scan_pitch(self.config.scan.initial_pitch_width)?;

        log::info!("best orientation found");
        self.log_position();
        Ok(())
    }

    /// Passive monitoring until the tracking duration elapses.
    ///
    /// Polls the sensor at the configured interval and logs voltage and
    /// elapsed time. No motor motion occurs in this phase.
    pub fn track(&mut self) -> Result<()> {
        self.phase = TrackerPhase::Tracking;

        let duration = Duration::from_secs(self.config.schedule.tracking_duration_secs as u64);
        let poll_ms = self.config.schedule.poll_interval_secs as u32 * 1000;
        let start = self.clock.elapsed();

        while self.clock.elapsed().saturating_sub(start) < duration {
            let raw = self
                .sensor
                .read_differential(self.config.sensor.gain, self.config.sensor.sample_rate)
                .map_err(|_| Error::Sensor(SensorError::ReadFailed))?;

            log::info!(
                "current voltage {:.4} V",
                raw * self.config.sensor.divider_scale
            );

            self.delay.delay_ms(poll_ms);

            let elapsed = self.clock.elapsed().saturating_sub(start);
            log::info!("seconds elapsed: {}", elapsed.as_secs());
        }

        Ok(())
    }

    /// One re-scan cycle: rotation neighborhood, pitch clamp, pitch
    /// neighborhood.
    pub fn rescan(&mut self) -> Result<()> {
        log::info!("updating scan");

        self.phase = TrackerPhase::RescanRotation;
        self.rotation_backward_units(self.config.scan.rescan_rotation_backoff_units)?;
        self.scan_rotation(self.config.scan.rescan_rotation_width)?;

        self.phase = TrackerPhase::RescanPitch;
        self.apply_pitch_clamp()?;
        self.scan_pitch(self.config.scan.rescan_pitch_width)?;

        self.log_position();
        Ok(())
    }

    /// Bias the pitch scan window upward before re-scanning.
    ///
    /// Without this, repeated downhill corrections could walk the scan
    /// window into the ground. Counts already beyond the hard limit get no
    /// correction.
    pub fn apply_pitch_clamp(&mut self) -> Result<()> {
        let magnitude = self.position.get(Axis::Pitch).abs();
        let units = clamp_units(
            magnitude,
            self.config.mechanical.pitch_clamp_soft_limit,
            self.config.mechanical.pitch_clamp_hard_limit,
        );

        if units > 0 {
            self.pitch_backward_units(units)?;
        }

        Ok(())
    }

    /// Forward scan on the rotation axis, then retreat to the peak.
    fn scan_rotation(&mut self, width: u16) -> Result<()> {
        self.settle();
        let samples = self.rotation_scanner().scan(width)?;
        self.position.advance(Axis::Rotation, width as i64);
        self.settle();

        let peak = locate_peak(&samples)?;
        log::info!(
            "rotating back {:.2} degrees",
            peak.back_degrees(self.config.mechanical.degrees_per_step)
                .value()
        );

        self.rotation_scanner().retreat(peak.back_steps)?;
        self.position.retreat(Axis::Rotation, peak.back_steps as i64);
        Ok(())
    }

    /// Forward scan on the pitch axis, then retreat to the peak.
    ///
    /// The pitch retreat deliberately walks one step past the located peak.
    /// The deployed rig has always done this and its resting positions are
    /// calibrated around it, so the extra step is preserved rather than
    /// "fixed" (see DESIGN.md).
    fn scan_pitch(&mut self, width: u16) -> Result<()> {
        self.settle();
        let samples = self.pitch_scanner().scan(width)?;
        self.position.advance(Axis::Pitch, width as i64);
        self.settle();

        let peak = locate_peak(&samples)?;
        log::info!(
            "pitching back {:.2} degrees",
            peak.back_degrees(self.config.mechanical.degrees_per_step)
                .value()
        );

        let retreat_steps = peak.back_steps + 1;
        self.pitch_scanner().retreat(retreat_steps)?;
        self.position.retreat(Axis::Pitch, retreat_steps as i64);
        Ok(())
    }

    fn rotation_backward_units(&mut self, units: u32) -> Result<()> {
        self.rotation
            .backward_units(units)
            .map_err(|_| Error::Motor(MotorError::StepFailed(Axis::Rotation)))?;
        self.position.retreat(Axis::Rotation, 2 * units as i64);
        Ok(())
    }

    fn pitch_backward_units(&mut self, units: u32) -> Result<()> {
        self.pitch
            .backward_units(units)
            .map_err(|_| Error::Motor(MotorError::StepFailed(Axis::Pitch)))?;
        self.position.retreat(Axis::Pitch, 2 * units as i64);
        Ok(())
    }

    fn rotation_scanner(&mut self) -> AxisScanner<'_, R, S, D> {
        AxisScanner::new(
            Axis::Rotation,
            &mut self.rotation,
            &mut self.sensor,
            &mut self.delay,
            &self.config.sensor,
            self.config.schedule.settle_delay_ms,
        )
    }

    fn pitch_scanner(&mut self) -> AxisScanner<'_, P, S, D> {
        AxisScanner::new(
            Axis::Pitch,
            &mut self.pitch,
            &mut self.sensor,
            &mut self.delay,
            &self.config.sensor,
            self.config.schedule.settle_delay_ms,
        )
    }

    fn settle(&mut self) {
        self.delay
            .delay_ms(self.config.schedule.scan_settle_secs as u32 * 1000);
    }

    fn log_position(&self) {
        let degrees_per_step = self.config.mechanical.degrees_per_step;
        log::info!(
            "current position: {:.2} degrees, pitch {:.2} degrees",
            self.position
                .degrees(Axis::Rotation, degrees_per_step)
                .value(),
            self.position.degrees(Axis::Pitch, degrees_per_step).value()
        );
    }
}

/// Clamp tiers: counts within the soft limit get two backward units, counts
/// between the limits get one, counts beyond the hard limit get none.
fn clamp_units(pitch_magnitude: u64, soft_limit: u32, hard_limit: u32) -> u32 {
    if pitch_magnitude <= soft_limit as u64 {
        2
    } else if pitch_magnitude <= hard_limit as u64 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_tiers() {
        // Defaults: soft=6, hard=8
        assert_eq!(clamp_units(5, 6, 8), 2);
        assert_eq!(clamp_units(6, 6, 8), 2);
        assert_eq!(clamp_units(7, 6, 8), 1);
        assert_eq!(clamp_units(8, 6, 8), 1);
        assert_eq!(clamp_units(9, 6, 8), 0);
        assert_eq!(clamp_units(0, 6, 8), 2);
    }
}
