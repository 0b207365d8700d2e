//! The outfit being assembled in a try-on view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ClothingItem;
use crate::errors::SaveOutfitError;
use crate::identity::AuthSession;
use crate::ids::ItemId;

use super::avatar::AvatarVariant;
use super::record::{NewOutfitRecord, OutfitItemRecord, OutfitMetadata};
use super::transform::Transform;

/// A clothing item placed on the avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub item: ClothingItem,
    pub transform: Transform,
}

impl PlacedItem {
    pub fn id(&self) -> &ItemId {
        &self.item.id
    }
}

/// Selected items plus the avatar they are worn on.
///
/// At most one [`PlacedItem`] exists per item id; insertion order is selection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutfitSession {
    placed: Vec<PlacedItem>,
    avatar: AvatarVariant,
}

impl OutfitSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_avatar(avatar: AvatarVariant) -> Self {
        Self {
            placed: Vec::new(),
            avatar,
        }
    }

    pub fn placed(&self) -> &[PlacedItem] {
        &self.placed
    }

    pub fn avatar(&self) -> AvatarVariant {
        self.avatar
    }

    pub fn item_count(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.placed.iter().any(|p| &p.item.id == id)
    }

    /// Removes the item if already placed, otherwise places it at the default transform.
    ///
    /// Returns `true` when the item ends up selected.
    pub fn toggle_item(&mut self, item: &ClothingItem) -> bool {
        if let Some(index) = self.placed.iter().position(|p| p.item.id == item.id) {
            self.placed.remove(index);
            false
        } else {
            self.placed.push(PlacedItem {
                item: item.clone(),
                transform: Transform::DEFAULT_PLACEMENT,
            });
            true
        }
    }

    /// Moves an already placed item. Unknown ids are ignored.
    pub fn update_placement(&mut self, id: &ItemId, transform: Transform) -> bool {
        match self.placed.iter_mut().find(|p| &p.item.id == id) {
            Some(placed) => {
                placed.transform = transform;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.placed.clear();
    }

    pub fn set_avatar_variant(&mut self, variant: AvatarVariant) {
        self.avatar = variant;
    }

    pub fn toggle_avatar_variant(&mut self) -> AvatarVariant {
        self.avatar = self.avatar.other();
        self.avatar
    }

    /// Builds the row inserted into the `outfits` collection.
    ///
    /// Fails without side effects when nothing is selected or nobody is signed in.
    pub fn serialize(
        &self,
        identity: Option<&AuthSession>,
        created_at: DateTime<Utc>,
    ) -> Result<NewOutfitRecord, SaveOutfitError> {
        if self.placed.is_empty() {
            return Err(SaveOutfitError::NoItemsSelected);
        }
        let identity = identity.ok_or(crate::errors::AuthRequiredError {
            action: "save outfit",
        })?;

        let items_used = self
            .placed
            .iter()
            .map(|placed| OutfitItemRecord {
                id: placed.item.id.clone(),
                item_name: placed.item.name.clone(),
                image_url: placed.item.image_ref.clone(),
                asset_path: placed.item.asset_ref.clone(),
                position: placed.transform.position.to_string(),
                rotation: placed.transform.rotation.to_string(),
                scale: placed.transform.scale.to_string(),
                category: placed.item.metadata.category.clone(),
            })
            .collect();

        Ok(NewOutfitRecord {
            user_id: identity.user_id.clone(),
            avatar_type: self.avatar,
            items_used,
            metadata: OutfitMetadata {
                created_at,
                item_count: self.placed.len(),
                avatar_type: self.avatar,
                avatar_id: self.avatar.profile().id.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::UserId;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::BTreeSet;

    fn item(id: &str) -> ClothingItem {
        let mut item = ClothingItem::new(ItemId::from_str(id));
        item.name = Some(format!("Item {}", id));
        item.image_ref = Some(format!("https://cdn.example/{}.png", id));
        item
    }

    fn identity() -> AuthSession {
        AuthSession {
            user_id: UserId::from_str("u1"),
            email: Some("u1@example.com".to_string()),
            access_token: "token".to_string(),
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut session = OutfitSession::new();
        let a = item("a");

        assert!(session.toggle_item(&a));
        assert_eq!(session.item_count(), 1);
        assert_eq!(session.placed()[0].transform, Transform::DEFAULT_PLACEMENT);

        assert!(!session.toggle_item(&a));
        assert!(session.is_empty());
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let mut session = OutfitSession::new();
        let a = item("a");
        let b = item("b");
        session.toggle_item(&a);
        session.toggle_item(&b);
        session.toggle_item(&a);
        session.toggle_item(&a);

        let ids: Vec<_> = session.placed().iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_toggle_sequence_matches_symmetric_difference() {
        let pool: Vec<ClothingItem> = (0..6).map(|i| item(&format!("i{}", i))).collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let mut session = OutfitSession::new();
            let mut expected = BTreeSet::new();
            let steps = rng.random_range(0..40);
            for _ in 0..steps {
                let pick = &pool[rng.random_range(0..pool.len())];
                session.toggle_item(pick);
                if !expected.remove(&pick.id) {
                    expected.insert(pick.id.clone());
                }
            }
            let actual: BTreeSet<_> = session.placed().iter().map(|p| p.id().clone()).collect();
            assert_eq!(actual, expected);
            assert_eq!(session.item_count(), expected.len());
        }
    }

    #[test]
    fn test_update_placement_only_touches_placed_items() {
        let mut session = OutfitSession::new();
        let a = item("a");
        session.toggle_item(&a);

        let moved = Transform::at([0.5, 1.0, -2.0].into());
        assert!(session.update_placement(&a.id, moved));
        assert_eq!(session.placed()[0].transform, moved);
        assert!(!session.update_placement(&ItemId::from_str("zz"), moved));
    }

    #[test]
    fn test_clear_empties_session_but_keeps_avatar() {
        let mut session = OutfitSession::with_avatar(AvatarVariant::Male);
        session.toggle_item(&item("a"));
        session.clear();
        assert!(session.is_empty());
        assert_eq!(session.avatar(), AvatarVariant::Male);
    }

    #[test]
    fn test_serialize_fails_when_empty_for_any_avatar_and_identity() {
        let now = Utc::now();
        for variant in AvatarVariant::ALL {
            let session = OutfitSession::with_avatar(variant);
            assert_eq!(
                session.serialize(Some(&identity()), now),
                Err(SaveOutfitError::NoItemsSelected)
            );
            assert_eq!(
                session.serialize(None, now),
                Err(SaveOutfitError::NoItemsSelected)
            );
        }
    }

    #[test]
    fn test_serialize_requires_identity() {
        let mut session = OutfitSession::new();
        session.toggle_item(&item("a"));
        let err = session.serialize(None, Utc::now()).unwrap_err();
        assert!(matches!(err, SaveOutfitError::AuthRequired(_)));
    }

    #[test]
    fn test_serialize_lists_items_in_selection_order() {
        let mut session = OutfitSession::new();
        let mut b = item("b");
        b.asset_ref = Some("https://cdn.example/b.glb".to_string());
        b.metadata.category = Some("Outerwear".to_string());
        session.toggle_item(&item("a"));
        session.toggle_item(&b);
        session.set_avatar_variant(AvatarVariant::Male);

        let now = Utc::now();
        let record = session.serialize(Some(&identity()), now).unwrap();

        assert_eq!(record.user_id.as_str(), "u1");
        assert_eq!(record.avatar_type, AvatarVariant::Male);
        assert_eq!(record.metadata.item_count, 2);
        assert_eq!(record.metadata.avatar_id, "avatar2");
        assert_eq!(record.metadata.created_at, now);
        assert_eq!(record.items_used[0].id.as_str(), "a");
        assert_eq!(record.items_used[1].id.as_str(), "b");
        assert_eq!(record.items_used[1].position, "0 1.5 -1");
        assert_eq!(record.items_used[1].category.as_deref(), Some("Outerwear"));
        assert_eq!(
            record.items_used[1].asset_path.as_deref(),
            Some("https://cdn.example/b.glb")
        );
    }
}
