//! Unit types for physical quantities.
//!
//! Provides type-safe representations of step counts, angles and voltages to
//! prevent unit confusion at compile time. Step counts are the primary
//! representation of position; degrees exist only for human-readable status
//! reporting.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Net step count from an arbitrary origin established at process start.
///
/// Uses i64 for unlimited range in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Steps(pub i64);

impl Steps {
    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Get absolute value as u64.
    #[inline]
    pub fn abs(self) -> u64 {
        self.0.unsigned_abs()
    }

    /// Convert to degrees using the degrees-per-step ratio.
    #[inline]
    pub fn to_degrees(self, degrees_per_step: f32) -> Degrees {
        Degrees(self.0 as f32 * degrees_per_step)
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Angular position in degrees.
///
/// Derived from [`Steps`] for status reporting, never used for control.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// A scaled photovoltaic voltage sample in volts.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Volts(pub f32);

impl Volts {
    /// Create a new Volts value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_to_degrees() {
        // 3.6 degrees per step = 100 steps per revolution
        let steps = Steps::new(100);
        let degrees = steps.to_degrees(3.6);
        assert!((degrees.value() - 360.0).abs() < 0.01);
    }

    #[test]
    fn test_negative_steps_to_degrees() {
        let steps = Steps::new(-10);
        let degrees = steps.to_degrees(3.6);
        assert!((degrees.value() + 36.0).abs() < 0.01);
    }

    #[test]
    fn test_steps_arithmetic() {
        let a = Steps::new(100);
        let b = Steps::new(40);
        assert_eq!((a - b).value(), 60);
        assert_eq!((a + b).value(), 140);
        assert_eq!(Steps::new(-9).abs(), 9);
    }
}
