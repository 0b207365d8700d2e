use std::sync::Arc;

use ff_core::catalog::ClothingItem;
use ff_core::errors::CatalogLoadError;
use ff_core::ports::{ItemRepositoryPort, ObjectStoragePort};
use ff_core::ViewerContext;
use tracing::{info, warn};

/// Loads the signed-in user's clothing items with fetchable references.
pub struct LoadCatalog {
    items: Arc<dyn ItemRepositoryPort>,
    storage: Arc<dyn ObjectStoragePort>,
    bucket: String,
}

impl LoadCatalog {
    pub fn from_ports(
        items: Arc<dyn ItemRepositoryPort>,
        storage: Arc<dyn ObjectStoragePort>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            items,
            storage,
            bucket: bucket.into(),
        }
    }

    /// Items owned by the viewer, newest first. All-or-nothing: on failure no
    /// partial list is returned.
    #[tracing::instrument(name = "usecase.load_catalog.execute", skip(self, viewer))]
    pub async fn execute(&self, viewer: &ViewerContext) -> Result<Vec<ClothingItem>, CatalogLoadError> {
        let session = viewer.require_identity("view catalog")?;

        let rows = self
            .items
            .list_items(session, &session.user_id)
            .await
            .map_err(|e| {
                warn!(user_id = %session.user_id, error = %e, "catalog load failed");
                CatalogLoadError::from(e)
            })?;

        let items: Vec<ClothingItem> = rows
            .into_iter()
            .map(|item| item.resolve_references(|path| self.storage.public_url(&self.bucket, path)))
            .collect();

        info!(user_id = %session.user_id, count = items.len(), "catalog loaded");
        Ok(items)
    }
}
