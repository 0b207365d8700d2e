use async_trait::async_trait;

use crate::errors::BackendError;
use crate::lead::NewLeadRecord;

/// Contact-form submissions. Anonymous visitors may write here.
#[async_trait]
pub trait LeadRepositoryPort: Send + Sync {
    async fn insert_lead(&self, record: &NewLeadRecord) -> Result<(), BackendError>;
}
