use std::sync::Arc;

use async_trait::async_trait;
use ff_core::errors::BackendError;
use ff_core::ports::ObjectStoragePort;
use ff_core::upload::UploadFile;
use ff_core::AuthSession;

use crate::backend::RestClient;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Object storage served by the same backend project as the tables.
pub struct RestObjectStorage {
    client: Arc<RestClient>,
}

impl RestObjectStorage {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStoragePort for RestObjectStorage {
    async fn upload(
        &self,
        session: &AuthSession,
        bucket: &str,
        path: &str,
        file: &UploadFile,
    ) -> Result<(), BackendError> {
        let content_type = file
            .content_type
            .as_deref()
            .unwrap_or(FALLBACK_CONTENT_TYPE);
        self.client
            .upload_object(bucket, path, file.bytes.clone(), content_type, session)
            .await
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        self.client.public_object_url(bucket, path)
    }
}
