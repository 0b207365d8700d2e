use std::sync::Arc;

use ff_core::catalog::ClothingItem;
use ff_core::errors::UploadError;
use ff_core::ports::{ClockPort, ItemRepositoryPort, ObjectStoragePort};
use ff_core::upload::{storage_path, NewItemRecord, UploadDraft};
use ff_core::ViewerContext;
use tracing::{info, warn};

/// Stores a clothing image and records it in the viewer's catalog.
pub struct UploadClothingItem {
    items: Arc<dyn ItemRepositoryPort>,
    storage: Arc<dyn ObjectStoragePort>,
    clock: Arc<dyn ClockPort>,
    bucket: String,
}

impl UploadClothingItem {
    pub fn from_ports(
        items: Arc<dyn ItemRepositoryPort>,
        storage: Arc<dyn ObjectStoragePort>,
        clock: Arc<dyn ClockPort>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            items,
            storage,
            clock,
            bucket: bucket.into(),
        }
    }

    /// Uploads the draft's file, then inserts the item row.
    ///
    /// The draft is only borrowed; on any failure the caller still holds
    /// every entered value and may resubmit.
    #[tracing::instrument(name = "usecase.upload_clothing_item.execute", skip(self, viewer, draft))]
    pub async fn execute(
        &self,
        viewer: &ViewerContext,
        draft: &UploadDraft,
    ) -> Result<ClothingItem, UploadError> {
        let identity = viewer.require_identity("upload item")?;
        let file = draft.validate()?;

        let uploaded_at = self.clock.now();
        let path = storage_path(&identity.user_id, file, uploaded_at.timestamp_millis());
        self.storage
            .upload(identity, &self.bucket, &path, file)
            .await
            .map_err(|e| {
                warn!(path = %path, error = %e, "object upload failed");
                UploadError::Storage(e.message)
            })?;

        let image_url = self.storage.public_url(&self.bucket, &path);
        let record = NewItemRecord::from_draft(
            draft,
            &identity.user_id,
            image_url,
            path,
            uploaded_at,
        );

        let stored = self
            .items
            .insert_item(identity, &record)
            .await
            .map_err(|e| {
                warn!(error = %e, "item insert failed");
                UploadError::Backend(e.message)
            })?;

        info!(item_id = %stored.id, "clothing item uploaded");
        Ok(stored.resolve_references(|p| self.storage.public_url(&self.bucket, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::*;
    use ff_core::upload::{ClothingCategory, UploadFile, MAX_UPLOAD_BYTES};

    const NOW_MS: i64 = 1_714_557_600_000;

    fn draft() -> UploadDraft {
        UploadDraft {
            item_name: "  Linen Shirt ".to_string(),
            description: String::new(),
            category: Some(ClothingCategory::Tops),
            file: Some(UploadFile {
                file_name: "shirt.photo.JPG".to_string(),
                content_type: Some("image/jpeg".to_string()),
                bytes: vec![0xff, 0xd8, 0xff],
            }),
        }
    }

    /// Advances one second on every read.
    struct TickingClock(std::sync::atomic::AtomicI64);

    impl ClockPort for TickingClock {
        fn now_ms(&self) -> i64 {
            self.0
                .fetch_add(1_000, std::sync::atomic::Ordering::SeqCst)
        }
    }

    struct Fixture {
        items: Arc<InMemoryItems>,
        storage: Arc<RecordingStorage>,
        use_case: UploadClothingItem,
    }

    fn fixture(items: InMemoryItems, storage: RecordingStorage) -> Fixture {
        let items = Arc::new(items);
        let storage = Arc::new(storage);
        let use_case = UploadClothingItem::from_ports(
            items.clone(),
            storage.clone(),
            Arc::new(FixedClock(NOW_MS)),
            BUCKET,
        );
        Fixture {
            items,
            storage,
            use_case,
        }
    }

    #[tokio::test]
    async fn stores_file_under_owner_and_timestamp_then_inserts_row() {
        let f = fixture(InMemoryItems::default(), RecordingStorage::default());

        let stored = f.use_case.execute(&signed_in("u1"), &draft()).await.unwrap();

        let uploads = f.storage.uploads.lock().unwrap().clone();
        assert_eq!(
            uploads,
            vec![(BUCKET.to_string(), format!("u1/{NOW_MS}.JPG"))]
        );

        let inserted = f.items.inserted.lock().unwrap().clone();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].item_name, "Linen Shirt");
        assert_eq!(inserted[0].description, None);
        assert_eq!(inserted[0].asset_path, format!("u1/{NOW_MS}.JPG"));
        assert_eq!(
            inserted[0].image_url,
            format!("https://cdn.example.com/garments/u1/{NOW_MS}.JPG")
        );
        assert_eq!(inserted[0].metadata.category.as_deref(), Some("Tops"));
        assert_eq!(
            stored.image_ref,
            Some(format!("https://cdn.example.com/garments/u1/{NOW_MS}.JPG"))
        );
    }

    #[tokio::test]
    async fn identity_is_checked_before_the_form() {
        let f = fixture(InMemoryItems::default(), RecordingStorage::default());

        let err = f
            .use_case
            .execute(&ViewerContext::anonymous(), &UploadDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::AuthRequired(_)));
    }

    #[tokio::test]
    async fn invalid_draft_never_touches_storage() {
        let f = fixture(InMemoryItems::default(), RecordingStorage::default());
        let mut oversized = draft();
        if let Some(file) = oversized.file.as_mut() {
            file.bytes = vec![0; MAX_UPLOAD_BYTES + 1];
        }

        let err = f
            .use_case
            .execute(&signed_in("u1"), &oversized)
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::FileTooLarge { .. }));
        assert!(f.storage.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_skips_row_insert() {
        let f = fixture(
            InMemoryItems::default(),
            RecordingStorage {
                fail_with: Some("bucket not found".to_string()),
                ..RecordingStorage::default()
            },
        );

        let err = f.use_case.execute(&signed_in("u1"), &draft()).await.unwrap_err();
        assert_eq!(err, UploadError::Storage("bucket not found".to_string()));
        assert!(f.items.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn row_failure_is_reported_as_backend_error() {
        let f = fixture(InMemoryItems::failing("violates row-level security"), RecordingStorage::default());

        let err = f.use_case.execute(&signed_in("u1"), &draft()).await.unwrap_err();
        assert_eq!(
            err,
            UploadError::Backend("violates row-level security".to_string())
        );
    }

    #[tokio::test]
    async fn storage_path_and_uploaded_at_share_one_clock_reading() {
        let items = Arc::new(InMemoryItems::default());
        let use_case = UploadClothingItem::from_ports(
            items.clone(),
            Arc::new(RecordingStorage::default()),
            Arc::new(TickingClock(std::sync::atomic::AtomicI64::new(NOW_MS))),
            BUCKET,
        );

        use_case.execute(&signed_in("u1"), &draft()).await.unwrap();

        let inserted = items.inserted.lock().unwrap().clone();
        let uploaded_at = inserted[0].metadata.uploaded_at.unwrap();
        assert_eq!(uploaded_at.timestamp_millis(), NOW_MS);
        assert_eq!(inserted[0].asset_path, format!("u1/{NOW_MS}.JPG"));
    }
}
