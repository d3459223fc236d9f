//! Voltage sensor configuration from TOML.

use serde::Deserialize;

/// Configuration for the differential voltage sensor.
///
/// Gain and sample rate are passed verbatim to the sensor on every read;
/// `divider_scale` converts the raw reading into cell volts, folding in the
/// compensation for the 5:1 voltage divider between cell and ADC.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorConfig {
    /// Programmable gain setting, in the sensor's own units.
    #[serde(default = "default_gain")]
    pub gain: u16,

    /// Samples per second setting, in the sensor's own units.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u16,

    /// Multiplier applied to every raw reading before storage.
    #[serde(default = "default_divider_scale")]
    pub divider_scale: f32,
}

fn default_gain() -> u16 {
    4096
}

fn default_sample_rate() -> u16 {
    128
}

fn default_divider_scale() -> f32 {
    0.005
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            gain: default_gain(),
            sample_rate: default_sample_rate(),
            divider_scale: default_divider_scale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_rig() {
        let config = SensorConfig::default();
        assert_eq!(config.gain, 4096);
        assert_eq!(config.sample_rate, 128);
        assert!((config.divider_scale - 0.005).abs() < 1e-9);
    }
}
