//! # ff-core
//!
//! Core domain models and business logic for FashionFOT VR.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the catalog window, the outfit session, the intro state machine and the
//! scene projection. Everything that talks to the outside world sits behind
//! [`ports`].

// Public module exports
pub mod catalog;
pub mod config;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod intro;
pub mod lead;
pub mod outfit;
pub mod ports;
pub mod scene;
pub mod upload;

// Re-export commonly used types at the crate root
pub use catalog::{CatalogWindow, ClothingItem, CAROUSEL_PAGE_SIZE};
pub use config::AppConfig;
pub use identity::{AuthSession, ViewerContext};
pub use ids::{ItemId, OutfitId, TimerId, UserId};
pub use intro::{AnimationStage, IntroTimeline, MotionPreference};
pub use outfit::{AvatarVariant, OutfitSession, Transform, Vec3};
pub use scene::{SceneEntity, EntityKind};
