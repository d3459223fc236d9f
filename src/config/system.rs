//! Tracker configuration - root configuration structure.

use serde::Deserialize;

use super::mechanical::MechanicalConfig;
use super::scan::ScanConfig;
use super::schedule::ScheduleConfig;
use super::sensor::SensorConfig;

/// Root configuration structure from TOML.
///
/// Every section and field has a default, so an empty TOML document (or
/// `TrackerConfig::default()`) yields the deployed rig's behavior exactly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackerConfig {
    /// Voltage sensor settings.
    #[serde(default)]
    pub sensor: SensorConfig,

    /// Scan widths and homing moves.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Pacing and cadence.
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Physical constants.
    #[serde(default)]
    pub mechanical: MechanicalConfig,
}
