//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::scan::MAX_SCAN_SAMPLES;

use super::TrackerConfig;

/// Validate a tracker configuration.
///
/// Checks:
/// - All scan widths fit the sample buffer and are at least one step
/// - Sensor divider scale is positive
/// - Poll interval and tracking duration form a sane cadence
/// - Pitch clamp limits are ordered (soft < hard)
pub fn validate_config(config: &TrackerConfig) -> Result<()> {
    validate_scan(&config.scan)?;
    validate_sensor(&config.sensor)?;
    validate_schedule(&config.schedule)?;
    validate_mechanical(&config.mechanical)
}

fn validate_scan(config: &super::ScanConfig) -> Result<()> {
    let widths = [
        ("initial_rotation_width", config.initial_rotation_width),
        ("initial_pitch_width", config.initial_pitch_width),
        ("rescan_rotation_width", config.rescan_rotation_width),
        ("rescan_pitch_width", config.rescan_pitch_width),
    ];

    for (field, width) in widths {
        if width == 0 || width as usize > MAX_SCAN_SAMPLES {
            return Err(Error::Config(ConfigError::InvalidScanWidth {
                field: heapless::String::try_from(field).unwrap_or_default(),
                width,
            }));
        }
    }

    Ok(())
}

fn validate_sensor(config: &super::SensorConfig) -> Result<()> {
    if config.divider_scale <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidDividerScale(
            config.divider_scale,
        )));
    }

    Ok(())
}

fn validate_schedule(config: &super::ScheduleConfig) -> Result<()> {
    if config.poll_interval_secs == 0 {
        return Err(Error::Config(ConfigError::InvalidPollInterval(
            config.poll_interval_secs,
        )));
    }

    if config.tracking_duration_secs < config.poll_interval_secs as u32 {
        return Err(Error::Config(ConfigError::TrackingTooShort {
            tracking_secs: config.tracking_duration_secs,
            poll_secs: config.poll_interval_secs,
        }));
    }

    Ok(())
}

fn validate_mechanical(config: &super::MechanicalConfig) -> Result<()> {
    if config.degrees_per_step <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidDegreesPerStep(
            config.degrees_per_step,
        )));
    }

    if config.pitch_clamp_soft_limit >= config.pitch_clamp_hard_limit {
        return Err(Error::Config(ConfigError::InvalidClampLimits {
            soft: config.pitch_clamp_soft_limit,
            hard: config.pitch_clamp_hard_limit,
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MechanicalConfig, ScanConfig, ScheduleConfig, SensorConfig};

    #[test]
    fn test_defaults_are_valid() {
        let config = TrackerConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_scan_width_rejected() {
        let config = TrackerConfig {
            scan: ScanConfig {
                initial_pitch_width: 0,
                ..Default::default()
            },
            ..Default::default()
        };

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidScanWidth { .. }))
        ));
    }

    #[test]
    fn test_oversized_scan_width_rejected() {
        let config = TrackerConfig {
            scan: ScanConfig {
                initial_rotation_width: MAX_SCAN_SAMPLES as u16 + 1,
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_divider_scale() {
        let config = TrackerConfig {
            sensor: SensorConfig {
                divider_scale: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidDividerScale(_)))
        ));
    }

    #[test]
    fn test_tracking_shorter_than_poll() {
        let config = TrackerConfig {
            schedule: ScheduleConfig {
                poll_interval_secs: 5,
                tracking_duration_secs: 3,
                ..Default::default()
            },
            ..Default::default()
        };

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::TrackingTooShort { .. }))
        ));
    }

    #[test]
    fn test_unordered_clamp_limits() {
        let config = TrackerConfig {
            mechanical: MechanicalConfig {
                pitch_clamp_soft_limit: 8,
                pitch_clamp_hard_limit: 8,
                ..Default::default()
            },
            ..Default::default()
        };

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidClampLimits { .. }))
        ));
    }
}
