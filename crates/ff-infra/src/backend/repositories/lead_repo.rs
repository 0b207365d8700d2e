use std::sync::Arc;

use async_trait::async_trait;
use ff_core::errors::BackendError;
use ff_core::lead::NewLeadRecord;
use ff_core::ports::LeadRepositoryPort;

use crate::backend::client::RestClient;
use crate::backend::mappers::LeadRowMapper;
use crate::backend::ports::InsertMapper;

const TABLE: &str = "leads";

pub struct RestLeadRepository {
    client: Arc<RestClient>,
    mapper: LeadRowMapper,
}

impl RestLeadRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            client,
            mapper: LeadRowMapper,
        }
    }
}

#[async_trait]
impl LeadRepositoryPort for RestLeadRepository {
    async fn insert_lead(&self, record: &NewLeadRecord) -> Result<(), BackendError> {
        let row = self
            .mapper
            .to_row(record)
            .map_err(|e| BackendError::new(e.to_string()))?;
        self.client.insert(TABLE, &row, None).await
    }
}
