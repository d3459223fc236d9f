//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::TrackerConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use solar_tracker::load_config;
///
/// let config = load_config("tracker.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TrackerConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<TrackerConfig> {
    let config: TrackerConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.scan.initial_rotation_width, 100);
        assert_eq!(config.schedule.tracking_duration_secs, 1800);
        assert_eq!(config.sensor.gain, 4096);
        assert!((config.mechanical.degrees_per_step - 3.6).abs() < 1e-6);
    }

    #[test]
    fn test_parse_overrides() {
        let toml = r#"
[scan]
rescan_rotation_width = 20
rescan_rotation_backoff_units = 5

[schedule]
tracking_duration_secs = 600

[sensor]
divider_scale = 0.004
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.scan.rescan_rotation_width, 20);
        assert_eq!(config.scan.rescan_rotation_backoff_units, 5);
        assert_eq!(config.schedule.tracking_duration_secs, 600);
        assert!((config.sensor.divider_scale - 0.004).abs() < 1e-9);
        // Untouched sections keep their defaults
        assert_eq!(config.scan.initial_pitch_width, 10);
    }

    #[test]
    fn test_parse_rejects_invalid_width() {
        let toml = r#"
[scan]
initial_pitch_width = 0
"#;

        assert!(parse_config(toml).is_err());
    }
}
