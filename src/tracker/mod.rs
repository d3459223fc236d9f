//! Tracker module for solar-tracker.
//!
//! Provides dead-reckoned position tracking and the orchestrator that
//! sequences scans, tracking phases and pitch safety clamps.

mod orchestrator;
mod position;
mod state;

pub use orchestrator::Orchestrator;
pub use position::PositionTracker;
pub use state::TrackerPhase;
