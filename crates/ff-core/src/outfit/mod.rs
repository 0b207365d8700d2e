//! Outfit domain: placement transforms, avatar variants, the in-view session
//! and the record it serializes into.

mod avatar;
mod record;
mod session;
mod transform;

pub use avatar::{profile_by_id, AvatarProfile, AvatarVariant, AVATAR_PROFILES};
pub use record::{NewOutfitRecord, OutfitItemRecord, OutfitMetadata};
pub use session::{OutfitSession, PlacedItem};
pub use transform::{Transform, Vec3};
