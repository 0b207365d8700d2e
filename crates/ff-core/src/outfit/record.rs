use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, UserId};

use super::avatar::AvatarVariant;

/// Row inserted into the `outfits` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOutfitRecord {
    pub user_id: UserId,
    pub avatar_type: AvatarVariant,
    pub items_used: Vec<OutfitItemRecord>,
    pub metadata: OutfitMetadata,
}

/// One placed item inside a saved outfit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitItemRecord {
    pub id: ItemId,
    pub item_name: Option<String>,
    pub image_url: Option<String>,
    pub asset_path: Option<String>,
    pub position: String,
    pub rotation: String,
    pub scale: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitMetadata {
    pub created_at: DateTime<Utc>,
    pub item_count: usize,
    pub avatar_type: AvatarVariant,
    pub avatar_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_shape() {
        let record = NewOutfitRecord {
            user_id: UserId::from_str("u1"),
            avatar_type: AvatarVariant::Female,
            items_used: vec![OutfitItemRecord {
                id: ItemId::from_str("a"),
                item_name: Some("Hoodie".to_string()),
                image_url: None,
                asset_path: None,
                position: "0 1.5 -1".to_string(),
                rotation: "0 0 0".to_string(),
                scale: "1 1 1".to_string(),
                category: None,
            }],
            metadata: OutfitMetadata {
                created_at: "2024-05-01T10:00:00Z".parse().unwrap(),
                item_count: 1,
                avatar_type: AvatarVariant::Female,
                avatar_id: "avatar1".to_string(),
            },
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["user_id"], "u1");
        assert_eq!(value["avatar_type"], "female");
        assert_eq!(value["items_used"][0]["item_name"], "Hoodie");
        assert_eq!(value["metadata"]["item_count"], 1);
        assert_eq!(value["metadata"]["avatar_id"], "avatar1");
    }
}
