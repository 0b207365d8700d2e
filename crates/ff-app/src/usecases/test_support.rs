//! Hand-written port doubles shared by the use case tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ff_core::catalog::ClothingItem;
use ff_core::errors::BackendError;
use ff_core::intro::IntroPose;
use ff_core::ports::{ClockPort, ItemRepositoryPort, ObjectStoragePort, RenderSurfacePort};
use ff_core::scene::SceneEntity;
use ff_core::upload::{NewItemRecord, UploadFile};
use ff_core::{AuthSession, ItemId, UserId, ViewerContext};
use tokio::sync::Notify;

pub const BUCKET: &str = "garments";

pub fn signed_in(user: &str) -> ViewerContext {
    ViewerContext::signed_in(AuthSession {
        user_id: UserId::from_str(user),
        email: None,
        access_token: format!("{user}-token"),
    })
}

pub fn item(id: &str, asset: Option<&str>) -> ClothingItem {
    let mut item = ClothingItem::new(ItemId::from_str(id));
    item.name = Some(format!("Item {id}"));
    item.image_ref = Some(format!("u1/{id}.png"));
    item.asset_ref = asset.map(str::to_string);
    item
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

#[derive(Default)]
pub struct InMemoryItems {
    pub items: Vec<ClothingItem>,
    pub fail_with: Option<String>,
    /// The first `list_items` call parks on the gate, then answers with these.
    pub first_call: Option<(Arc<Notify>, Vec<ClothingItem>)>,
    pub list_calls: AtomicUsize,
    pub inserted: Mutex<Vec<NewItemRecord>>,
}

impl InMemoryItems {
    pub fn with_items(items: Vec<ClothingItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn gated_first_call(
        gate: Arc<Notify>,
        first: Vec<ClothingItem>,
        later: Vec<ClothingItem>,
    ) -> Self {
        Self {
            items: later,
            first_call: Some((gate, first)),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl ItemRepositoryPort for InMemoryItems {
    async fn list_items(
        &self,
        _session: &AuthSession,
        _owner: &UserId,
    ) -> Result<Vec<ClothingItem>, BackendError> {
        let call = self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let (0, Some((gate, first))) = (call, &self.first_call) {
            gate.notified().await;
            return Ok(first.clone());
        }
        match &self.fail_with {
            Some(message) => Err(BackendError::new(message.clone())),
            None => Ok(self.items.clone()),
        }
    }

    async fn insert_item(
        &self,
        _session: &AuthSession,
        record: &NewItemRecord,
    ) -> Result<ClothingItem, BackendError> {
        if let Some(message) = &self.fail_with {
            return Err(BackendError::new(message.clone()));
        }
        self.inserted.lock().unwrap().push(record.clone());
        let mut stored = ClothingItem::new(ItemId::from_str("stored-1"));
        stored.name = Some(record.item_name.clone());
        stored.image_ref = Some(record.asset_path.clone());
        stored.metadata = record.metadata.clone();
        Ok(stored)
    }
}

#[derive(Default)]
pub struct RecordingStorage {
    pub fail_with: Option<String>,
    pub uploads: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl ObjectStoragePort for RecordingStorage {
    async fn upload(
        &self,
        _session: &AuthSession,
        bucket: &str,
        path: &str,
        _file: &UploadFile,
    ) -> Result<(), BackendError> {
        if let Some(message) = &self.fail_with {
            return Err(BackendError::new(message.clone()));
        }
        self.uploads
            .lock()
            .unwrap()
            .push((bucket.to_string(), path.to_string()));
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("https://cdn.example.com/{bucket}/{path}")
    }
}

#[derive(Default)]
pub struct RecordingSurface {
    pub scenes: Mutex<Vec<Vec<SceneEntity>>>,
    pub intro_poses: Mutex<Vec<IntroPose>>,
}

impl RecordingSurface {
    pub fn last_scene(&self) -> Option<Vec<SceneEntity>> {
        self.scenes.lock().unwrap().last().cloned()
    }
}

impl RenderSurfacePort for RecordingSurface {
    fn present_scene(&self, entities: &[SceneEntity]) {
        self.scenes.lock().unwrap().push(entities.to_vec());
    }

    fn present_intro(&self, pose: &IntroPose) {
        self.intro_poses.lock().unwrap().push(pose.clone());
    }
}
