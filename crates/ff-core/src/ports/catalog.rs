use async_trait::async_trait;

use crate::catalog::ClothingItem;
use crate::errors::BackendError;
use crate::identity::AuthSession;
use crate::ids::UserId;
use crate::upload::NewItemRecord;

/// Row-oriented access to the `items` collection.
#[async_trait]
pub trait ItemRepositoryPort: Send + Sync {
    /// Items owned by `owner`, newest first. References are returned as stored.
    async fn list_items(
        &self,
        session: &AuthSession,
        owner: &UserId,
    ) -> Result<Vec<ClothingItem>, BackendError>;

    /// Inserts an uploaded item and returns the stored row.
    async fn insert_item(
        &self,
        session: &AuthSession,
        record: &NewItemRecord,
    ) -> Result<ClothingItem, BackendError>;
}
