//! Clothing upload form model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ItemMetadata;
use crate::errors::UploadError;
use crate::ids::UserId;

/// Largest image accepted by the upload form.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClothingCategory {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
    Activewear,
    Formal,
}

impl ClothingCategory {
    pub const ALL: [ClothingCategory; 8] = [
        ClothingCategory::Tops,
        ClothingCategory::Bottoms,
        ClothingCategory::Dresses,
        ClothingCategory::Outerwear,
        ClothingCategory::Shoes,
        ClothingCategory::Accessories,
        ClothingCategory::Activewear,
        ClothingCategory::Formal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ClothingCategory::Tops => "Tops",
            ClothingCategory::Bottoms => "Bottoms",
            ClothingCategory::Dresses => "Dresses",
            ClothingCategory::Outerwear => "Outerwear",
            ClothingCategory::Shoes => "Shoes",
            ClothingCategory::Accessories => "Accessories",
            ClothingCategory::Activewear => "Activewear",
            ClothingCategory::Formal => "Formal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// A file picked in the upload form.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl UploadFile {
    /// Extension after the last dot, `"bin"` when there is none.
    pub fn extension(&self) -> &str {
        match self.file_name.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => ext,
            _ => "bin",
        }
    }
}

/// Upload form contents. Kept by the caller across failed submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub item_name: String,
    pub description: String,
    pub category: Option<ClothingCategory>,
    pub file: Option<UploadFile>,
}

impl UploadDraft {
    /// Checks the form before anything touches the network.
    pub fn validate(&self) -> Result<&UploadFile, UploadError> {
        let file = self.file.as_ref().ok_or(UploadError::NoFile)?;
        if file.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::FileTooLarge {
                size: file.bytes.len(),
                max: MAX_UPLOAD_BYTES,
            });
        }
        if self.item_name.trim().is_empty() {
            return Err(UploadError::MissingName);
        }
        if self.category.is_none() {
            return Err(UploadError::MissingCategory);
        }
        Ok(file)
    }

    /// Whether the submit control should be enabled.
    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Storage path of an upload: `<user-id>/<epoch-ms>.<ext>`.
pub fn storage_path(owner: &UserId, file: &UploadFile, now_ms: i64) -> String {
    format!("{}/{}.{}", owner, now_ms, file.extension())
}

/// Row inserted into the `items` collection after the file is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItemRecord {
    pub user_id: UserId,
    pub item_name: String,
    pub description: Option<String>,
    pub image_url: String,
    pub asset_path: String,
    pub metadata: ItemMetadata,
}

impl NewItemRecord {
    pub fn from_draft(
        draft: &UploadDraft,
        owner: &UserId,
        image_url: String,
        asset_path: String,
        uploaded_at: DateTime<Utc>,
    ) -> Self {
        let description = match draft.description.trim() {
            "" => None,
            text => Some(text.to_string()),
        };
        Self {
            user_id: owner.clone(),
            item_name: draft.item_name.trim().to_string(),
            description,
            image_url,
            asset_path,
            metadata: ItemMetadata {
                category: draft.category.map(|c| c.as_str().to_string()),
                uploaded_at: Some(uploaded_at),
                extra: Default::default(),
            },
        }
    }
}
