use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the `items` table as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRow {
    #[serde(deserialize_with = "super::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub asset_path: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewItemRow {
    pub user_id: String,
    pub item_name: String,
    pub description: Option<String>,
    pub image_url: String,
    pub asset_path: String,
    pub metadata: serde_json::Value,
}
