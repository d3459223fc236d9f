//! Peak locator - argmax over a sample sequence.

use crate::config::units::{Degrees, Volts};
use crate::error::{Error, Result, ScanError};

/// The located maximum of one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peak {
    /// 0-based step index of the maximum sample within the scan.
    pub index: usize,
    /// Steps from the scan end-point back to the peak (width - index).
    pub back_steps: u16,
}

impl Peak {
    /// Retreat distance in degrees, for status lines only.
    #[inline]
    pub fn back_degrees(&self, degrees_per_step: f32) -> Degrees {
        Degrees(degrees_per_step * self.back_steps as f32)
    }
}

/// Find the peak of a non-empty sample sequence.
///
/// When several samples tie for the maximum, the first occurrence wins.
/// That tie-break is a determinism guarantee: noisy flat-topped scans must
/// always resolve to the same resting position.
pub fn locate_peak(samples: &[Volts]) -> Result<Peak> {
    if samples.is_empty() {
        return Err(Error::Scan(ScanError::EmptySequence));
    }

    let mut index = 0;
    let mut best = samples[0];

    for (i, &sample) in samples.iter().enumerate().skip(1) {
        if sample.value() > best.value() {
            best = sample;
            index = i;
        }
    }

    Ok(Peak {
        index,
        back_steps: (samples.len() - index) as u16,
    })
}
