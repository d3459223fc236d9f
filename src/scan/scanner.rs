//! Axis scanner - exhaustive forward sweep with per-step sampling.

use embedded_hal::delay::DelayNs;

use crate::config::units::Volts;
use crate::config::SensorConfig;
use crate::error::{Error, MotorError, Result, ScanError, SensorError};
use crate::hal::{Axis, Direction, PhaseSequencer, StepDriver, VoltageSensor};

/// Maximum scan width in steps, sizing the sample buffer.
///
/// The widest scan in practice is the initial full revolution (100 steps).
pub const MAX_SCAN_SAMPLES: usize = 128;

/// Ordered voltage samples from one scan, one per forward step.
pub type SampleSequence = heapless::Vec<Volts, MAX_SCAN_SAMPLES>;

/// Performs exhaustive scans and retreats on one axis.
///
/// Borrows the driver, sensor and delay for the duration of one operation;
/// the orchestrator constructs a fresh scanner per scan or retreat. Position
/// accounting is deliberately not done here - the caller updates its
/// [`PositionTracker`](crate::tracker::PositionTracker) around every call so
/// motion and count never diverge.
pub struct AxisScanner<'a, M, S, D>
where
    M: StepDriver,
    S: VoltageSensor,
    D: DelayNs,
{
    axis: Axis,
    motor: &'a mut M,
    sensor: &'a mut S,
    delay: &'a mut D,
    sensor_config: &'a SensorConfig,
    settle_delay_ms: u32,
}

impl<'a, M, S, D> AxisScanner<'a, M, S, D>
where
    M: StepDriver,
    S: VoltageSensor,
    D: DelayNs,
{
    /// Create a scanner over borrowed hardware.
    pub fn new(
        axis: Axis,
        motor: &'a mut M,
        sensor: &'a mut S,
        delay: &'a mut D,
        sensor_config: &'a SensorConfig,
        settle_delay_ms: u32,
    ) -> Self {
        Self {
            axis,
            motor,
            sensor,
            delay,
            sensor_config,
            settle_delay_ms,
        }
    }

    /// The axis this scanner drives.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Move `width` single steps forward, sampling voltage after each step.
    ///
    /// Step 1 uses phase A, step 2 phase B, and so on. Each raw reading is
    /// multiplied by the configured divider scale before storage, then the
    /// settle delay runs before the next step. Returns exactly `width`
    /// samples in step order.
    ///
    /// # Errors
    ///
    /// Any driver or sensor fault aborts the scan immediately; there is no
    /// partial-scan recovery. The caller's position count then reflects the
    /// steps issued before the fault.
    pub fn scan(&mut self, width: u16) -> Result<SampleSequence> {
        if width == 0 || width as usize > MAX_SCAN_SAMPLES {
            return Err(Error::Scan(ScanError::WidthOutOfRange {
                requested: width,
                max: MAX_SCAN_SAMPLES as u16,
            }));
        }

        let mut samples = SampleSequence::new();
        let mut phases = PhaseSequencer::new();

        for _ in 0..width {
            self.motor
                .step(Direction::Forward, phases.next())
                .map_err(|_| Error::Motor(MotorError::StepFailed(self.axis)))?;

            let raw = self
                .sensor
                .read_differential(self.sensor_config.gain, self.sensor_config.sample_rate)
                .map_err(|_| Error::Sensor(SensorError::ReadFailed))?;

            let volts = Volts(raw * self.sensor_config.divider_scale);
            // Width was validated against the buffer capacity above
            let _ = samples.push(volts);

            log::info!("{}: current voltage {:.4} V", self.axis.name(), volts.value());

            self.delay.delay_ms(self.settle_delay_ms);
        }

        Ok(samples)
    }

    /// Walk `steps` single steps backward with the same phase alternation
    /// as a forward scan (step 1 phase A, step 2 phase B, ...).
    pub fn retreat(&mut self, steps: u16) -> Result<()> {
        let mut phases = PhaseSequencer::new();

        for _ in 0..steps {
            self.motor
                .step(Direction::Backward, phases.next())
                .map_err(|_| Error::Motor(MotorError::StepFailed(self.axis)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::StepPhase;
    use embedded_hal_mock::eh1::delay::NoopDelay;

    #[derive(Default)]
    struct RecordingDriver {
        calls: Vec<(Direction, StepPhase)>,
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

    struct RampSensor {
        reading: f32,
    }

    impl VoltageSensor for RampSensor {
        type Error = core::convert::Infallible;

        fn read_differential(
            &mut self,
            _gain: u16,
            _sample_rate: u16,
        ) -> core::result::Result<f32, Self::Error> {
            self.reading += 1.0;
            Ok(self.reading)
        }
    }

    struct FailingSensor;

    impl VoltageSensor for FailingSensor {
        type Error = ();

        fn read_differential(
            &mut self,
            _gain: u16,
            _sample_rate: u16,
        ) -> core::result::Result<f32, Self::Error> {
            Err(())
        }
    }

    #[test]
    fn test_scan_returns_width_samples_with_alternating_phases() {
        let mut motor = RecordingDriver::default();
        let mut sensor = RampSensor { reading: 0.0 };
        let mut delay = NoopDelay::new();
        let config = SensorConfig::default();

        let samples = AxisScanner::new(
            Axis::Rotation,
            &mut motor,
            &mut sensor,
            &mut delay,
            &config,
            0,
        )
        .scan(7)
        .unwrap();

        assert_eq!(samples.len(), 7);
        assert_eq!(motor.calls.len(), 7);
        for (i, (direction, phase)) in motor.calls.iter().enumerate() {
            assert_eq!(*direction, Direction::Forward);
            // 1-based step i+1: odd steps phase A, even steps phase B
            let expected = if (i + 1) % 2 != 0 {
                StepPhase::A
            } else {
                StepPhase::B
            };
            assert_eq!(*phase, expected);
        }
    }

    #[test]
    fn test_scan_applies_divider_scale() {
        let mut motor = RecordingDriver::default();
        let mut sensor = RampSensor { reading: 0.0 };
        let mut delay = NoopDelay::new();
        let config = SensorConfig::default();

        let samples = AxisScanner::new(
            Axis::Pitch,
            &mut motor,
            &mut sensor,
            &mut delay,
            &config,
            0,
        )
        .scan(3)
        .unwrap();

        // Readings 1.0, 2.0, 3.0 scaled by 0.005
        assert!((samples[0].value() - 0.005).abs() < 1e-6);
        assert!((samples[1].value() - 0.010).abs() < 1e-6);
        assert!((samples[2].value() - 0.015).abs() < 1e-6);
    }

    #[test]
    fn test_scan_rejects_bad_widths() {
        let mut motor = RecordingDriver::default();
        let mut sensor = RampSensor { reading: 0.0 };
        let mut delay = NoopDelay::new();
        let config = SensorConfig::default();

        let mut scanner = AxisScanner::new(
            Axis::Rotation,
            &mut motor,
            &mut sensor,
            &mut delay,
            &config,
            0,
        );

        assert!(scanner.scan(0).is_err());
        assert!(scanner.scan(MAX_SCAN_SAMPLES as u16 + 1).is_err());
        assert!(motor.calls.is_empty());
    }

    #[test]
    fn test_sensor_fault_aborts_scan() {
        let mut motor = RecordingDriver::default();
        let mut sensor = FailingSensor;
        let mut delay = NoopDelay::new();
        let config = SensorConfig::default();

        let result = AxisScanner::new(
            Axis::Rotation,
            &mut motor,
            &mut sensor,
            &mut delay,
            &config,
            0,
        )
        .scan(10);

        assert_eq!(result, Err(Error::Sensor(SensorError::ReadFailed)));
        // Fault hit after the first step; nothing was retried
        assert_eq!(motor.calls.len(), 1);
    }

    #[test]
    fn test_retreat_phases_restart_at_a() {
        let mut motor = RecordingDriver::default();
        let mut sensor = RampSensor { reading: 0.0 };
        let mut delay = NoopDelay::new();
        let config = SensorConfig::default();

        let mut scanner = AxisScanner::new(
            Axis::Rotation,
            &mut motor,
            &mut sensor,
            &mut delay,
            &config,
            0,
        );
        scanner.scan(3).unwrap();
        scanner.retreat(2).unwrap();

        assert_eq!(motor.calls.len(), 5);
        assert_eq!(motor.calls[3], (Direction::Backward, StepPhase::A));
        assert_eq!(motor.calls[4], (Direction::Backward, StepPhase::B));
    }
}
