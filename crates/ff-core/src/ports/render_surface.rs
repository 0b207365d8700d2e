use crate::intro::IntroPose;
use crate::scene::SceneEntity;

/// The 3D/VR presentation layer. Consumes projections; never produces state.
pub trait RenderSurfacePort: Send + Sync {
    fn present_scene(&self, entities: &[SceneEntity]);
    fn present_intro(&self, pose: &IntroPose);
}

/// Receives the single "intro finished" notification.
pub trait IntroObserverPort: Send + Sync {
    fn on_intro_complete(&self);
}
