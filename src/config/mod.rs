//! Configuration module for solar-tracker.
//!
//! Provides types for loading and validating tracker configuration from TOML
//! files (with `std` feature) or pre-parsed data. All defaults reproduce the
//! constants of the deployed two-axis rig (100 steps per revolution, 30
//! minute re-scan cadence, 5:1 voltage divider).

mod mechanical;
mod scan;
mod schedule;
mod sensor;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use mechanical::MechanicalConfig;
pub use scan::ScanConfig;
pub use schedule::ScheduleConfig;
pub use sensor::SensorConfig;
pub use system::TrackerConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, Steps, Volts};
