use std::sync::Arc;

use async_trait::async_trait;
use ff_core::catalog::ClothingItem;
use ff_core::errors::BackendError;
use ff_core::ports::ItemRepositoryPort;
use ff_core::upload::NewItemRecord;
use ff_core::{AuthSession, UserId};

use crate::backend::client::RestClient;
use crate::backend::mappers::ItemRowMapper;
use crate::backend::models::ItemRow;
use crate::backend::ports::{InsertMapper, RowMapper};

const TABLE: &str = "items";

pub struct RestItemRepository {
    client: Arc<RestClient>,
    mapper: ItemRowMapper,
}

impl RestItemRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            client,
            mapper: ItemRowMapper,
        }
    }
}

#[async_trait]
impl ItemRepositoryPort for RestItemRepository {
    async fn list_items(
        &self,
        session: &AuthSession,
        owner: &UserId,
    ) -> Result<Vec<ClothingItem>, BackendError> {
        let query = [
            ("select", "*".to_string()),
            ("user_id", format!("eq.{}", owner)),
            ("order", "created_at.desc".to_string()),
        ];
        let rows: Vec<ItemRow> = self.client.select(TABLE, &query, Some(session)).await?;
        rows.iter()
            .map(|row| self.mapper.to_domain(row))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| BackendError::new(e.to_string()))
    }

    async fn insert_item(
        &self,
        session: &AuthSession,
        record: &NewItemRecord,
    ) -> Result<ClothingItem, BackendError> {
        let row = self
            .mapper
            .to_row(record)
            .map_err(|e| BackendError::new(e.to_string()))?;
        let stored: ItemRow = self
            .client
            .insert_returning(TABLE, &row, Some(session))
            .await?;
        self.mapper
            .to_domain(&stored)
            .map_err(|e| BackendError::new(e.to_string()))
    }
}
