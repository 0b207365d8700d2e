//! Scene projection: outfit session -> flat list of render entities.
//!
//! The render surface is a consumer of this list; whether it builds a
//! retained scene graph or declarative markup from it is its own business.

use serde::{Deserialize, Serialize};

use crate::intro::{avatar_transform, AnimationStage};
use crate::outfit::{OutfitSession, PlacedItem, Transform, Vec3};

const MODEL_SUFFIX: &str = ".glb";

/// Where the avatar stands in the try-on scene.
pub const AVATAR_PLACEMENT: Transform = Transform::at(Vec3::new(0.0, 0.0, -3.0));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    AvatarModel,
    PlanarTexture,
    #[serde(rename = "3d-model")]
    Model3d,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEntity {
    /// Stable key, unique within one projection.
    pub key: String,
    pub kind: EntityKind,
    pub transform: Transform,
    /// Resolved resource URL; empty when the item has none.
    pub src: String,
}

/// Kind an asset reference renders as: `.glb` files are models, anything else a textured plane.
pub fn kind_for_asset(asset_ref: Option<&str>) -> EntityKind {
    match asset_ref {
        Some(r) if r.ends_with(MODEL_SUFFIX) => EntityKind::Model3d,
        _ => EntityKind::PlanarTexture,
    }
}

/// Projects the session into render entities: the avatar first, then every
/// placed item in selection order.
///
/// When the intro is still running (`stage` is `avatar`), the avatar takes
/// its descending intro placement instead of the try-on spot.
pub fn project(session: &OutfitSession, stage: Option<AnimationStage>) -> Vec<SceneEntity> {
    let profile = session.avatar().profile();
    let avatar_placement = match stage {
        Some(AnimationStage::Avatar) => {
            avatar_transform(AnimationStage::Avatar).unwrap_or(AVATAR_PLACEMENT)
        }
        _ => AVATAR_PLACEMENT,
    };

    let mut entities = Vec::with_capacity(session.item_count() + 1);
    entities.push(SceneEntity {
        key: format!("avatar-{}", profile.id),
        kind: EntityKind::AvatarModel,
        transform: avatar_placement,
        src: profile.model_url.to_string(),
    });
    entities.extend(session.placed().iter().map(project_item));
    entities
}

fn project_item(placed: &PlacedItem) -> SceneEntity {
    let kind = kind_for_asset(placed.item.asset_ref.as_deref());
    let src = match kind {
        EntityKind::Model3d => placed.item.asset_ref.clone(),
        _ => placed.item.image_ref.clone(),
    }
    .unwrap_or_default();

    SceneEntity {
        key: format!("placed-{}", placed.item.id),
        kind,
        transform: placed.transform,
        src,
    }
}
