//! Mechanical constants from TOML.

use serde::Deserialize;

/// Physical constants of the tracker mechanism.
#[derive(Debug, Clone, Deserialize)]
pub struct MechanicalConfig {
    /// Degrees of axis travel per single step (3.6 = 100 steps/rev).
    /// Used only for human-readable status lines, never for control.
    #[serde(default = "default_degrees_per_step")]
    pub degrees_per_step: f32,

    /// Pitch counts at or below this magnitude get a 2-unit clamp before
    /// a re-scan.
    #[serde(default = "default_pitch_clamp_soft_limit")]
    pub pitch_clamp_soft_limit: u32,

    /// Pitch counts above the soft limit but at or below this magnitude
    /// get a 1-unit clamp. Beyond it no clamp is applied - the pitch is
    /// already far enough from the ground for the scan window.
    #[serde(default = "default_pitch_clamp_hard_limit")]
    pub pitch_clamp_hard_limit: u32,
}

fn default_degrees_per_step() -> f32 {
    3.6
}

fn default_pitch_clamp_soft_limit() -> u32 {
    6
}

fn default_pitch_clamp_hard_limit() -> u32 {
    8
}

impl Default for MechanicalConfig {
    fn default() -> Self {
        Self {
            degrees_per_step: default_degrees_per_step(),
            pitch_clamp_soft_limit: default_pitch_clamp_soft_limit(),
            pitch_clamp_hard_limit: default_pitch_clamp_hard_limit(),
        }
    }
}
