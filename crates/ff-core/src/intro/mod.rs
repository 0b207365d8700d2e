//! Landing-page intro: stage sequence, timings, state machine and poses.

mod pose;
mod stage;
mod state_machine;
mod timeline;

pub use pose::{avatar_transform, GlyphPose, IntroLayout, IntroPose, GARMENT_EXIT, WORDMARK};
pub use stage::{AnimationStage, MotionPreference};
pub use state_machine::{IntroAction, IntroEvent, IntroState, IntroStateMachine};
pub use timeline::IntroTimeline;
