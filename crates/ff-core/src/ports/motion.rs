use crate::intro::MotionPreference;

/// Source of the viewer's reduced-motion setting. Read each time it matters.
pub trait MotionPreferencePort: Send + Sync {
    fn motion_preference(&self) -> MotionPreference;
}
