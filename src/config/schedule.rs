//! Timing configuration from TOML.

use serde::Deserialize;

/// Pacing and cadence of the control loop.
///
/// These are hard real-time pacing requirements, not cosmetics: the settle
/// delay lets the cell voltage stabilize after each step, and the scan
/// settle brackets every scan so readings are not taken mid-vibration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Delay after each sample before the next step, in milliseconds.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u32,

    /// Settle time before and after every scan, in seconds.
    #[serde(default = "default_scan_settle_secs")]
    pub scan_settle_secs: u16,

    /// Voltage poll interval during the tracking phase, in seconds.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u16,

    /// Continuous tracking time before a re-scan, in seconds.
    #[serde(default = "default_tracking_duration_secs")]
    pub tracking_duration_secs: u32,
}

fn default_settle_delay_ms() -> u32 {
    100
}

fn default_scan_settle_secs() -> u16 {
    2
}

fn default_poll_interval_secs() -> u16 {
    5
}

fn default_tracking_duration_secs() -> u32 {
    1800
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            scan_settle_secs: default_scan_settle_secs(),
            poll_interval_secs: default_poll_interval_secs(),
            tracking_duration_secs: default_tracking_duration_secs(),
        }
    }
}
