//! Orchestrator phase names.

/// Phase of the tracker's state machine.
///
/// The cycle is `InitRotationScan -> InitPitchScan -> Tracking ->
/// RescanRotation -> RescanPitch -> Tracking -> ...`, looping until the
/// process is terminated externally or a hardware fault propagates out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerPhase {
    /// Initial full-revolution rotation scan.
    InitRotationScan,
    /// Initial narrow pitch scan.
    InitPitchScan,
    /// Passive voltage monitoring; no motion.
    Tracking,
    /// Periodic rotation neighborhood re-scan.
    RescanRotation,
    /// Periodic pitch neighborhood re-scan (preceded by the safety clamp).
    RescanPitch,
}

impl TrackerPhase {
    /// Phase name for status lines.
    pub fn name(self) -> &'static str {
        match self {
            TrackerPhase::InitRotationScan => "InitRotationScan",
            TrackerPhase::InitPitchScan => "InitPitchScan",
            TrackerPhase::Tracking => "Tracking",
            TrackerPhase::RescanRotation => "RescanRotation",
            TrackerPhase::RescanPitch => "RescanPitch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_names() {
        assert_eq!(TrackerPhase::Tracking.name(), "Tracking");
        assert_eq!(TrackerPhase::RescanPitch.name(), "RescanPitch");
    }
}
