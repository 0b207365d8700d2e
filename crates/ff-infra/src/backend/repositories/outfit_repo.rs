use std::sync::Arc;

use async_trait::async_trait;
use ff_core::errors::BackendError;
use ff_core::outfit::NewOutfitRecord;
use ff_core::ports::OutfitRepositoryPort;
use ff_core::{AuthSession, OutfitId};

use crate::backend::client::RestClient;
use crate::backend::mappers::OutfitRowMapper;
use crate::backend::models::OutfitRow;
use crate::backend::ports::{InsertMapper, RowMapper};

const TABLE: &str = "outfits";

pub struct RestOutfitRepository {
    client: Arc<RestClient>,
    mapper: OutfitRowMapper,
}

impl RestOutfitRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            client,
            mapper: OutfitRowMapper,
        }
    }
}

#[async_trait]
impl OutfitRepositoryPort for RestOutfitRepository {
    async fn insert_outfit(
        &self,
        session: &AuthSession,
        record: &NewOutfitRecord,
    ) -> Result<OutfitId, BackendError> {
        let row = self
            .mapper
            .to_row(record)
            .map_err(|e| BackendError::new(e.to_string()))?;
        let stored: OutfitRow = self
            .client
            .insert_returning(TABLE, &row, Some(session))
            .await?;
        self.mapper
            .to_domain(&stored)
            .map_err(|e| BackendError::new(e.to_string()))
    }
}
