//! Scan module for solar-tracker.
//!
//! Provides the exhaustive forward axis scan and the peak locator that
//! together form one hill-climbing iteration.

mod peak;
mod scanner;

pub use peak::{locate_peak, Peak};
pub use scanner::{AxisScanner, SampleSequence, MAX_SCAN_SAMPLES};
