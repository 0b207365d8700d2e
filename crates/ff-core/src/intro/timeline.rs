use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delays between intro stages, each relative to entering the previous stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroTimeline {
    /// idle -> garment. Covers render-surface warm-up plus a short beat.
    pub garment_delay: Duration,
    /// Upper bound on the garment reveal; the surface may report earlier.
    pub garment_reveal_timeout: Duration,
    /// fragment -> assemble.
    pub assemble_delay: Duration,
    /// assemble -> avatar.
    pub avatar_delay: Duration,
    /// avatar -> complete.
    pub complete_delay: Duration,
}

impl Default for IntroTimeline {
    fn default() -> Self {
        Self {
            garment_delay: Duration::from_millis(700 + 500),
            garment_reveal_timeout: Duration::from_millis(2500),
            assemble_delay: Duration::from_millis(1500),
            avatar_delay: Duration::from_millis(1500),
            complete_delay: Duration::from_millis(1000),
        }
    }
}

impl IntroTimeline {
    /// Total time of the full-motion path when the garment uses its whole time-box.
    pub fn full_motion_length(&self) -> Duration {
        self.garment_delay
            + self.garment_reveal_timeout
            + self.assemble_delay
            + self.avatar_delay
            + self.complete_delay
    }
}
