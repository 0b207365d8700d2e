use serde::{Deserialize, Serialize};

/// Stages of the landing-page intro, in the only order they may be visited.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AnimationStage {
    #[default]
    Idle,
    Garment,
    Fragment,
    Assemble,
    Avatar,
    Complete,
}

impl AnimationStage {
    pub const ORDER: [AnimationStage; 6] = [
        AnimationStage::Idle,
        AnimationStage::Garment,
        AnimationStage::Fragment,
        AnimationStage::Assemble,
        AnimationStage::Avatar,
        AnimationStage::Complete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnimationStage::Idle => "idle",
            AnimationStage::Garment => "garment",
            AnimationStage::Fragment => "fragment",
            AnimationStage::Assemble => "assemble",
            AnimationStage::Avatar => "avatar",
            AnimationStage::Complete => "complete",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == AnimationStage::Complete
    }

    /// The render surface stays hidden behind a loading placeholder while idle.
    pub fn surface_visible(self) -> bool {
        self != AnimationStage::Idle
    }
}

impl std::fmt::Display for AnimationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the viewer asked the OS for reduced motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }
}
