use async_trait::async_trait;

use crate::errors::BackendError;
use crate::identity::AuthSession;
use crate::upload::UploadFile;

/// Blob storage addressed by bucket + relative path.
#[async_trait]
pub trait ObjectStoragePort: Send + Sync {
    async fn upload(
        &self,
        session: &AuthSession,
        bucket: &str,
        path: &str,
        file: &UploadFile,
    ) -> Result<(), BackendError>;

    /// Public URL of an object. Pure string work, no request is made.
    fn public_url(&self, bucket: &str, path: &str) -> String;
}
