use ff_core::intro::IntroPose;
use ff_core::ports::RenderSurfacePort;
use ff_core::scene::SceneEntity;
use tracing::{debug, info};

/// Render surface for headless runs: every frame is written to the log as JSON.
#[derive(Debug, Default)]
pub struct TracingRenderSurface;

impl TracingRenderSurface {
    pub fn new() -> Self {
        Self
    }
}

impl RenderSurfacePort for TracingRenderSurface {
    fn present_scene(&self, entities: &[SceneEntity]) {
        match serde_json::to_string(entities) {
            Ok(json) => info!(entity_count = entities.len(), scene = %json, "present scene"),
            Err(e) => debug!(error = %e, "scene not serializable"),
        }
    }

    fn present_intro(&self, pose: &IntroPose) {
        match serde_json::to_string(pose) {
            Ok(json) => info!(stage = %pose.stage, pose = %json, "present intro"),
            Err(e) => debug!(error = %e, "intro pose not serializable"),
        }
    }
}
