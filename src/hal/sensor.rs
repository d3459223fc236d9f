//! Voltage sensor abstraction.

/// A single-sample differential voltage reader.
///
/// One instantaneous reading per call; the tracker never averages or
/// filters. The returned value is in raw converted volts - the caller
/// applies the configured divider compensation before storing it.
pub trait VoltageSensor {
    /// Sensor-specific error type.
    type Error;

    /// Take one differential sample with the given gain and sample-rate
    /// settings.
    fn read_differential(
        &mut self,
        gain: u16,
        sample_rate: u16,
    ) -> core::result::Result<f32, Self::Error>;
}
