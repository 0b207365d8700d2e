use anyhow::Result;
use ff_core::outfit::NewOutfitRecord;
use ff_core::OutfitId;

use crate::backend::models::{NewOutfitRow, OutfitRow};
use crate::backend::ports::{InsertMapper, RowMapper};

pub struct OutfitRowMapper;

impl InsertMapper<NewOutfitRecord, NewOutfitRow> for OutfitRowMapper {
    fn to_row(&self, domain: &NewOutfitRecord) -> Result<NewOutfitRow> {
        Ok(NewOutfitRow {
            user_id: domain.user_id.to_string(),
            avatar_type: domain.avatar_type.as_str().to_string(),
            items_used: serde_json::to_value(&domain.items_used)?,
            metadata: serde_json::to_value(&domain.metadata)?,
        })
    }
}

impl RowMapper<OutfitRow, OutfitId> for OutfitRowMapper {
    fn to_domain(&self, row: &OutfitRow) -> Result<OutfitId> {
        Ok(OutfitId::from(row.id.clone()))
    }
}
