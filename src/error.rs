//! Error types for the solar-tracker library.
//!
//! Provides unified error handling across configuration, motor control, the
//! sensor and scan execution. Hardware faults are never retried: a failed
//! step or read propagates out of the control loop and is fatal to the
//! caller, since blindly re-issuing physical motion without position
//! verification would drift the dead-reckoned counters.

use core::fmt;

use crate::hal::Axis;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all solar-tracker operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Stepper driver error
    Motor(MotorError),
    /// Voltage sensor error
    Sensor(SensorError),
    /// Scan execution error
    Scan(ScanError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Scan width outside 1..=MAX_SCAN_SAMPLES
    InvalidScanWidth {
        /// Which scan field was out of range
        field: heapless::String<32>,
        /// The configured width
        width: u16,
    },
    /// Divider scale must be > 0
    InvalidDividerScale(f32),
    /// Poll interval must be >= 1 second
    InvalidPollInterval(u16),
    /// Tracking phase must be at least one poll interval long
    TrackingTooShort {
        /// Configured tracking duration in seconds
        tracking_secs: u32,
        /// Configured poll interval in seconds
        poll_secs: u16,
    },
    /// Pitch clamp limits invalid (soft must be < hard)
    InvalidClampLimits {
        /// Soft limit in steps from origin
        soft: u32,
        /// Hard limit in steps from origin
        hard: u32,
    },
    /// Degrees per step must be > 0
    InvalidDegreesPerStep(f32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Stepper driver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorError {
    /// A commanded step failed on the given axis
    StepFailed(Axis),
}

/// Voltage sensor errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// A differential read failed
    ReadFailed,
}

/// Scan execution errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// Peak location requires at least one sample
    EmptySequence,
    /// Requested scan width exceeds the sample buffer
    WidthOutOfRange {
        /// Requested width in steps
        requested: u16,
        /// Maximum supported width
        max: u16,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Sensor(e) => write!(f, "Sensor error: {}", e),
            Error::Scan(e) => write!(f, "Scan error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidScanWidth { field, width } => {
                write!(f, "Invalid scan width for '{}': {}", field, width)
            }
            ConfigError::InvalidDividerScale(v) => {
                write!(f, "Invalid divider scale: {}. Must be > 0", v)
            }
            ConfigError::InvalidPollInterval(v) => {
                write!(f, "Invalid poll interval: {}s. Must be >= 1", v)
            }
            ConfigError::TrackingTooShort {
                tracking_secs,
                poll_secs,
            } => {
                write!(
                    f,
                    "Tracking duration {}s shorter than poll interval {}s",
                    tracking_secs, poll_secs
                )
            }
            ConfigError::InvalidClampLimits { soft, hard } => {
                write!(
                    f,
                    "Invalid clamp limits: soft ({}) must be < hard ({})",
                    soft, hard
                )
            }
            ConfigError::InvalidDegreesPerStep(v) => {
                write!(f, "Invalid degrees per step: {}. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::StepFailed(axis) => {
                write!(f, "Step command failed on {} axis", axis.name())
            }
        }
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::ReadFailed => write!(f, "Differential voltage read failed"),
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::EmptySequence => write!(f, "Sample sequence is empty"),
            ScanError::WidthOutOfRange { requested, max } => {
                write!(f, "Scan width {} exceeds maximum {}", requested, max)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Error::Sensor(e)
    }
}

impl From<ScanError> for Error {
    fn from(e: ScanError) -> Self {
        Error::Scan(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for SensorError {}

#[cfg(feature = "std")]
impl std::error::Error for ScanError {}
