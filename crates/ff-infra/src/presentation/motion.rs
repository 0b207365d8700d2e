use std::sync::atomic::{AtomicBool, Ordering};

use ff_core::ports::MotionPreferencePort;
use ff_core::MotionPreference;

/// A reduced-motion flag that can be flipped while the intro is running.
#[derive(Debug, Default)]
pub struct StaticMotionPreference {
    reduced: AtomicBool,
}

impl StaticMotionPreference {
    pub fn new(reduced: bool) -> Self {
        Self {
            reduced: AtomicBool::new(reduced),
        }
    }

    pub fn set_reduced(&self, reduced: bool) {
        self.reduced.store(reduced, Ordering::SeqCst);
    }
}

impl MotionPreferencePort for StaticMotionPreference {
    fn motion_preference(&self) -> MotionPreference {
        MotionPreference::from_reduced(self.reduced.load(Ordering::SeqCst))
    }
}
