use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, UserId};

/// Free-form metadata stored alongside an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,

    /// Keys this model does not know about, kept so a round trip loses nothing.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A clothing upload as seen by the try-on view. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: ItemId,
    pub name: Option<String>,
    /// Image reference: storage-relative path or absolute URL.
    pub image_ref: Option<String>,
    /// Optional 3D asset reference (`.glb`), same addressing as `image_ref`.
    pub asset_ref: Option<String>,
    pub metadata: ItemMetadata,
    pub description: Option<String>,
    pub owner: Option<UserId>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ClothingItem {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            name: None,
            image_ref: None,
            asset_ref: None,
            metadata: ItemMetadata::default(),
            description: None,
            owner: None,
            created_at: None,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed Item")
    }

    pub fn category(&self) -> Option<&str> {
        self.metadata.category.as_deref()
    }

    pub fn category_label(&self) -> &str {
        self.category().unwrap_or("Uncategorized")
    }

    /// Rewrites storage-relative references into fetchable URLs.
    ///
    /// Absolute references are passed through untouched.
    pub fn resolve_references(mut self, resolve: impl Fn(&str) -> String) -> Self {
        self.image_ref = self.image_ref.map(|r| resolve_reference(&r, &resolve));
        self.asset_ref = self.asset_ref.map(|r| resolve_reference(&r, &resolve));
        self
    }
}

/// `true` for `http://` and `https://` references.
pub fn is_absolute_reference(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

fn resolve_reference(reference: &str, resolve: &impl Fn(&str) -> String) -> String {
    if reference.is_empty() || is_absolute_reference(reference) {
        reference.to_string()
    } else {
        resolve(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn public(path: &str) -> String {
        format!("https://cdn.example/garments/{}", path)
    }

    #[test]
    fn test_relative_references_are_resolved() {
        let mut item = ClothingItem::new(ItemId::from_str("a"));
        item.image_ref = Some("u1/1700000000000.png".to_string());
        item.asset_ref = Some("u1/jacket.glb".to_string());

        let item = item.resolve_references(public);

        assert_eq!(
            item.image_ref.as_deref(),
            Some("https://cdn.example/garments/u1/1700000000000.png")
        );
        assert_eq!(
            item.asset_ref.as_deref(),
            Some("https://cdn.example/garments/u1/jacket.glb")
        );
    }

    #[test]
    fn test_absolute_and_missing_references_pass_through() {
        let mut item = ClothingItem::new(ItemId::from_str("a"));
        item.image_ref = Some("https://elsewhere/x.png".to_string());

        let item = item.resolve_references(public);

        assert_eq!(item.image_ref.as_deref(), Some("https://elsewhere/x.png"));
        assert_eq!(item.asset_ref, None);
    }

    #[test]
    fn test_metadata_keeps_unknown_keys() {
        let json = r#"{"category":"Tops","uploaded_at":"2024-05-01T10:00:00Z","color":"red"}"#;
        let meta: ItemMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.category.as_deref(), Some("Tops"));
        assert!(meta.uploaded_at.is_some());
        assert_eq!(meta.extra.get("color"), Some(&serde_json::json!("red")));
    }

    #[test]
    fn test_labels_fall_back_when_fields_missing() {
        let item = ClothingItem::new(ItemId::from_str("a"));
        assert_eq!(item.display_name(), "Unnamed Item");
        assert_eq!(item.category_label(), "Uncategorized");
    }
}
