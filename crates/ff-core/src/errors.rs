//! Error taxonomy of the try-on flow.
//!
//! Every error here is recoverable: it is handled at the user action that
//! triggered it and leaves the session usable.

use thiserror::Error;

/// Failure reported by a backend port (query, insert, storage upload).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BackendError {
    pub message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An action that needs a signed-in identity was attempted without one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("authentication required: {action}")]
pub struct AuthRequiredError {
    pub action: &'static str,
}

/// Catalog query failed; the catalog stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogLoadError {
    #[error(transparent)]
    AuthRequired(#[from] AuthRequiredError),

    #[error("failed to load items: {0}")]
    Backend(String),
}

impl From<BackendError> for CatalogLoadError {
    fn from(err: BackendError) -> Self {
        Self::Backend(err.message)
    }
}

/// Saving an outfit failed; the session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveOutfitError {
    #[error("no items selected")]
    NoItemsSelected,

    #[error(transparent)]
    AuthRequired(#[from] AuthRequiredError),

    #[error("failed to save outfit: {0}")]
    Backend(String),
}

impl From<BackendError> for SaveOutfitError {
    fn from(err: BackendError) -> Self {
        Self::Backend(err.message)
    }
}

/// Uploading a clothing item failed; the draft keeps its values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error(transparent)]
    AuthRequired(#[from] AuthRequiredError),

    #[error("no file selected")]
    NoFile,

    #[error("file too large: {size} bytes (max {max})")]
    FileTooLarge { size: usize, max: usize },

    #[error("item name is required")]
    MissingName,

    #[error("category is required")]
    MissingCategory,

    #[error("upload failed: {0}")]
    Storage(String),

    #[error("failed to save item: {0}")]
    Backend(String),
}

/// Contact form submission failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadSubmitError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("failed to send message: {0}")]
    Backend(String),
}

impl From<BackendError> for LeadSubmitError {
    fn from(err: BackendError) -> Self {
        Self::Backend(err.message)
    }
}
