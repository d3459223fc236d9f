//! # solar-tracker
//!
//! Closed-loop hill-climbing control for a two-axis solar tracker with
//! embedded-hal 1.0 support.
//!
//! A rotation and a pitch stepper motor orient a photovoltaic cell; the only
//! feedback is a single differential voltage reading. The library performs
//! exhaustive 1-D scans on each axis, retreats to the step with the highest
//! reading, and alternates passive voltage monitoring with periodic
//! re-scans. Position is dead-reckoned by counting commanded steps - there
//! is no absolute position sensing.
//!
//! ## Features
//!
//! - **Configuration-driven**: Scan widths, cadence and sensor scaling in TOML
//! - **embedded-hal 1.0**: Uses `DelayNs` for all timed pacing
//! - **no_std compatible**: Core library works without standard library
//! - **Hardware-agnostic**: Motors, sensor and clock enter through traits
//! - **Dead-reckoned position**: Every commanded step updates the tracker
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solar_tracker::{Orchestrator, TrackerConfig};
//!
//! // Load configuration from TOML (defaults match the deployed rig)
//! let config: TrackerConfig = solar_tracker::load_config("tracker.toml")?;
//!
//! // Wire up hardware implementations of the driver/sensor/clock traits
//! let mut tracker = Orchestrator::new(
//!     config, rotation_driver, pitch_driver, adc, delay, clock,
//! );
//!
//! // Initial sky scan, then monitor/re-scan forever; only an error returns
//! tracker.run()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and the std clock
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod hal;
pub mod scan;
pub mod tracker;

// Re-exports for ergonomic API
pub use config::{
    validate_config, MechanicalConfig, ScanConfig, ScheduleConfig, SensorConfig, TrackerConfig,
};
pub use error::{Error, Result};
pub use hal::{Axis, Clock, Direction, PhaseSequencer, StepDriver, StepPhase, VoltageSensor};
pub use scan::{locate_peak, AxisScanner, Peak, SampleSequence, MAX_SCAN_SAMPLES};
pub use tracker::{Orchestrator, PositionTracker, TrackerPhase};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Clock backed by std::time (std only)
#[cfg(feature = "std")]
pub use hal::StdClock;

// Unit types
pub use config::units::{Degrees, Steps, Volts};
