//! One controller per mounted try-on view.
//!
//! Owns the catalog, the carousel window, the outfit session and the saving
//! flag. Mutations are serialized by an internal lock; network calls never
//! hold it, so the user can keep toggling while a load or save is in flight.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use ff_core::catalog::{CatalogWindow, ClothingItem};
use ff_core::errors::{CatalogLoadError, SaveOutfitError};
use ff_core::ports::RenderSurfacePort;
use ff_core::scene::{self, SceneEntity};
use ff_core::{AvatarVariant, ItemId, OutfitId, OutfitSession, Transform, ViewerContext};

use crate::usecases::{LoadCatalog, SaveOutfit};

/// Outcome of [`TryOnController::load_catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogLoad {
    Loaded(usize),
    /// The view was dismissed or a newer load started while this one ran.
    Stale,
}

#[derive(Debug, Default)]
struct TryOnState {
    catalog: Vec<ClothingItem>,
    window: CatalogWindow,
    session: OutfitSession,
    saving: bool,
}

pub struct TryOnController {
    viewer: ViewerContext,
    load_catalog: Arc<LoadCatalog>,
    save_outfit: Arc<SaveOutfit>,
    surface: Arc<dyn RenderSurfacePort>,
    state: Mutex<TryOnState>,
    load_generation: AtomicU64,
    dismissed: AtomicBool,
}

impl TryOnController {
    pub fn new(
        viewer: ViewerContext,
        load_catalog: Arc<LoadCatalog>,
        save_outfit: Arc<SaveOutfit>,
        surface: Arc<dyn RenderSurfacePort>,
    ) -> Self {
        Self {
            viewer,
            load_catalog,
            save_outfit,
            surface,
            state: Mutex::new(TryOnState::default()),
            load_generation: AtomicU64::new(0),
            dismissed: AtomicBool::new(false),
        }
    }

    pub fn viewer(&self) -> &ViewerContext {
        &self.viewer
    }

    /// Fetches the viewer's catalog and replaces the current one.
    ///
    /// On failure the catalog is left empty. A response that arrives after
    /// [`dismiss`](Self::dismiss) or after a newer load is dropped.
    #[tracing::instrument(name = "usecase.try_on.load_catalog", skip(self))]
    pub async fn load_catalog(&self) -> Result<CatalogLoad, CatalogLoadError> {
        let generation = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.load_catalog.execute(&self.viewer).await;

        if self.is_stale(generation) {
            debug!(generation, "dropping catalog response for a stale view");
            return Ok(CatalogLoad::Stale);
        }

        let mut state = self.state.lock().await;
        state.window.reset();
        match result {
            Ok(items) => {
                let count = items.len();
                state.catalog = items;
                info!(count, "catalog ready");
                Ok(CatalogLoad::Loaded(count))
            }
            Err(err) => {
                state.catalog.clear();
                Err(err)
            }
        }
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.dismissed.load(Ordering::SeqCst)
            || self.load_generation.load(Ordering::SeqCst) != generation
    }

    /// The view is going away; in-flight responses will be ignored.
    pub fn dismiss(&self) {
        self.dismissed.store(true, Ordering::SeqCst);
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed.load(Ordering::SeqCst)
    }

    pub async fn catalog(&self) -> Vec<ClothingItem> {
        self.state.lock().await.catalog.clone()
    }

    pub async fn visible_items(&self) -> Vec<ClothingItem> {
        let state = self.state.lock().await;
        state.window.visible(&state.catalog).to_vec()
    }

    pub async fn window(&self) -> CatalogWindow {
        self.state.lock().await.window
    }

    pub async fn next_page(&self) -> usize {
        let mut state = self.state.lock().await;
        let total = state.catalog.len();
        state.window.next(total);
        state.window.offset()
    }

    pub async fn prev_page(&self) -> usize {
        let mut state = self.state.lock().await;
        state.window.prev();
        state.window.offset()
    }

    /// Toggles a catalog item in the outfit. `None` when the id is not in the catalog.
    pub async fn toggle_item(&self, item_id: &ItemId) -> Option<bool> {
        let mut state = self.state.lock().await;
        let item = state.catalog.iter().find(|i| &i.id == item_id)?.clone();
        let selected = state.session.toggle_item(&item);
        debug!(item_id = %item_id, selected, count = state.session.item_count(), "item toggled");
        self.render(&state.session);
        Some(selected)
    }

    pub async fn update_placement(&self, item_id: &ItemId, transform: Transform) -> bool {
        let mut state = self.state.lock().await;
        let updated = state.session.update_placement(item_id, transform);
        if updated {
            self.render(&state.session);
        }
        updated
    }

    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        state.session.clear();
        self.render(&state.session);
    }

    pub async fn set_avatar(&self, variant: AvatarVariant) {
        let mut state = self.state.lock().await;
        state.session.set_avatar_variant(variant);
        self.render(&state.session);
    }

    pub async fn toggle_avatar(&self) -> AvatarVariant {
        let mut state = self.state.lock().await;
        let variant = state.session.toggle_avatar_variant();
        self.render(&state.session);
        variant
    }

    pub async fn session(&self) -> OutfitSession {
        self.state.lock().await.session.clone()
    }

    pub async fn is_saving(&self) -> bool {
        self.state.lock().await.saving
    }

    /// Saves the session as it is at call time. The session is never cleared.
    pub async fn save(&self) -> Result<OutfitId, SaveOutfitError> {
        let snapshot = {
            let mut state = self.state.lock().await;
            state.saving = true;
            state.session.clone()
        };

        let result = self.save_outfit.execute(&self.viewer, &snapshot).await;

        self.state.lock().await.saving = false;
        result
    }

    /// Current scene, avatar first then placed items in insertion order.
    pub async fn scene(&self) -> Vec<SceneEntity> {
        scene::project(&self.state.lock().await.session, None)
    }

    /// Pushes the current scene to the render surface.
    pub async fn present(&self) {
        let state = self.state.lock().await;
        self.render(&state.session);
    }

    fn render(&self, session: &OutfitSession) {
        self.surface.present_scene(&scene::project(session, None));
    }
}
