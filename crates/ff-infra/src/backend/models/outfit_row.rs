use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct NewOutfitRow {
    pub user_id: String,
    pub avatar_type: String,
    pub items_used: serde_json::Value,
    pub metadata: serde_json::Value,
}

/// Only the id is read back after an outfit insert.
#[derive(Debug, Clone, Deserialize)]
pub struct OutfitRow {
    #[serde(deserialize_with = "super::string_or_number")]
    pub id: String,
}
