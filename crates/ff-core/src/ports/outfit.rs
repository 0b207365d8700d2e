use async_trait::async_trait;

use crate::errors::BackendError;
use crate::identity::AuthSession;
use crate::ids::OutfitId;
use crate::outfit::NewOutfitRecord;

#[async_trait]
pub trait OutfitRepositoryPort: Send + Sync {
    async fn insert_outfit(
        &self,
        session: &AuthSession,
        record: &NewOutfitRecord,
    ) -> Result<OutfitId, BackendError>;
}
