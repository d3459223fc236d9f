//! Scan geometry configuration from TOML.

use serde::Deserialize;

/// Scan widths and homing moves for both axes.
///
/// Widths are in single steps; backoff and homing moves are in backward
/// units, where one unit is two single steps (the driver's coarse backward
/// primitive). Defaults reproduce the deployed rig: a full-revolution
/// initial rotation scan, a narrow pitch scan, and small neighborhood
/// re-scans thereafter.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Width of the initial rotation scan (100 = one full revolution).
    #[serde(default = "default_initial_rotation_width")]
    pub initial_rotation_width: u16,

    /// Width of the initial pitch scan.
    #[serde(default = "default_initial_pitch_width")]
    pub initial_pitch_width: u16,

    /// Width of each periodic rotation re-scan.
    #[serde(default = "default_rescan_rotation_width")]
    pub rescan_rotation_width: u16,

    /// Width of each periodic pitch re-scan.
    #[serde(default = "default_rescan_pitch_width")]
    pub rescan_pitch_width: u16,

    /// Backward units moved before each rotation re-scan, so the scan
    /// window straddles the current position.
    #[serde(default = "default_rescan_rotation_backoff_units")]
    pub rescan_rotation_backoff_units: u32,

    /// Backward units bringing the pitch down from zenith at startup.
    #[serde(default = "default_initial_pitch_homing_units")]
    pub initial_pitch_homing_units: u32,

    /// Further backward units lowering the pitch before its first scan.
    #[serde(default = "default_pitch_lowering_units")]
    pub pitch_lowering_units: u32,
}

fn default_initial_rotation_width() -> u16 {
    100
}

fn default_initial_pitch_width() -> u16 {
    10
}

fn default_rescan_rotation_width() -> u16 {
    16
}

fn default_rescan_pitch_width() -> u16 {
    5
}

fn default_rescan_rotation_backoff_units() -> u32 {
    4
}

fn default_initial_pitch_homing_units() -> u32 {
    2
}

fn default_pitch_lowering_units() -> u32 {
    3
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            initial_rotation_width: default_initial_rotation_width(),
            initial_pitch_width: default_initial_pitch_width(),
            rescan_rotation_width: default_rescan_rotation_width(),
            rescan_pitch_width: default_rescan_pitch_width(),
            rescan_rotation_backoff_units: default_rescan_rotation_backoff_units(),
            initial_pitch_homing_units: default_initial_pitch_homing_units(),
            pitch_lowering_units: default_pitch_lowering_units(),
        }
    }
}
