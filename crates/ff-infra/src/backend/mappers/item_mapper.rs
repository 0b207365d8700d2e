use anyhow::Result;
use ff_core::catalog::{ClothingItem, ItemMetadata};
use ff_core::upload::NewItemRecord;
use ff_core::{ItemId, UserId};
use tracing::warn;

use crate::backend::models::{ItemRow, NewItemRow};
use crate::backend::ports::{InsertMapper, RowMapper};

pub struct ItemRowMapper;

impl InsertMapper<NewItemRecord, NewItemRow> for ItemRowMapper {
    fn to_row(&self, domain: &NewItemRecord) -> Result<NewItemRow> {
        Ok(NewItemRow {
            user_id: domain.user_id.to_string(),
            item_name: domain.item_name.clone(),
            description: domain.description.clone(),
            image_url: domain.image_url.clone(),
            asset_path: domain.asset_path.clone(),
            metadata: serde_json::to_value(&domain.metadata)?,
        })
    }
}

impl RowMapper<ItemRow, ClothingItem> for ItemRowMapper {
    fn to_domain(&self, row: &ItemRow) -> Result<ClothingItem> {
        Ok(ClothingItem {
            id: ItemId::from(row.id.clone()),
            name: row.item_name.clone(),
            image_ref: non_empty(&row.image_url),
            asset_ref: non_empty(&row.asset_path),
            metadata: map_metadata(&row.id, row.metadata.as_ref()),
            description: row.description.clone(),
            owner: row.user_id.clone().map(UserId::from),
            created_at: row.created_at,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

/// Metadata is free-form; a value the model cannot read degrades to empty.
fn map_metadata(item_id: &str, value: Option<&serde_json::Value>) -> ItemMetadata {
    match value {
        None | Some(serde_json::Value::Null) => ItemMetadata::default(),
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            warn!(item_id, error = %e, "unreadable item metadata");
            ItemMetadata::default()
        }),
    }
}
