//! # Dependency Injection
//!
//! The only place that depends on `ff-infra` and `ff-app` together. It
//! assembles adapters behind ports and hands use cases to the run loop;
//! it makes no decisions beyond filling unset configuration.

use std::sync::Arc;
use std::time::Duration;

use ff_app::{LoadCatalog, SaveOutfit, SubmitLead, UploadClothingItem};
use ff_core::config::{AppConfig, IntroConfig};
use ff_core::intro::IntroTimeline;
use ff_core::ports::{ClockPort, ObjectStoragePort, RenderSurfacePort};
use ff_core::{AuthSession, UserId, ViewerContext};
use ff_infra::{
    RestClient, RestItemRepository, RestLeadRepository, RestObjectStorage, RestOutfitRepository,
    StaticMotionPreference, SystemClock, TracingRenderSurface,
};

/// Bucket used when `[storage] bucket` is empty.
pub const DEFAULT_BUCKET: &str = "garments";

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClient(String),
}

/// Everything the run loop needs, already wired.
pub struct AppDeps {
    pub load_catalog: Arc<LoadCatalog>,
    pub save_outfit: Arc<SaveOutfit>,
    pub upload_item: Arc<UploadClothingItem>,
    pub submit_lead: Arc<SubmitLead>,
    pub surface: Arc<dyn RenderSurfacePort>,
    pub motion: Arc<StaticMotionPreference>,
    pub timeline: IntroTimeline,
}

pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let client = Arc::new(
        RestClient::with_request_timeout(
            config.backend_url.clone(),
            config.anon_key.clone(),
            request_timeout(config),
        )
        .map_err(|e| WiringError::HttpClient(e.to_string()))?,
    );
    let bucket = storage_bucket(config);
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let storage: Arc<dyn ObjectStoragePort> = Arc::new(RestObjectStorage::new(client.clone()));
    let items = Arc::new(RestItemRepository::new(client.clone()));

    tracing::debug!(backend_url = %config.backend_url, bucket = %bucket, "wiring dependencies");

    Ok(AppDeps {
        load_catalog: Arc::new(LoadCatalog::from_ports(
            items.clone(),
            storage.clone(),
            bucket.clone(),
        )),
        save_outfit: Arc::new(SaveOutfit::from_ports(
            Arc::new(RestOutfitRepository::new(client.clone())),
            clock.clone(),
        )),
        upload_item: Arc::new(UploadClothingItem::from_ports(items, storage, clock, bucket)),
        submit_lead: Arc::new(SubmitLead::from_ports(Arc::new(RestLeadRepository::new(
            client,
        )))),
        surface: Arc::new(TracingRenderSurface::new()),
        motion: Arc::new(StaticMotionPreference::new(config.intro.reduced_motion)),
        timeline: intro_timeline(&config.intro),
    })
}

fn storage_bucket(config: &AppConfig) -> String {
    if config.storage_bucket.trim().is_empty() {
        DEFAULT_BUCKET.to_string()
    } else {
        config.storage_bucket.clone()
    }
}

/// Backend calls have no timeout unless `[backend] request_timeout_ms` is a positive value.
fn request_timeout(config: &AppConfig) -> Option<Duration> {
    config
        .request_timeout_ms
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

/// Configured timings, each falling back to [`IntroTimeline::default`].
pub fn intro_timeline(config: &IntroConfig) -> IntroTimeline {
    let defaults = IntroTimeline::default();
    let pick = |ms: Option<u64>, fallback: Duration| ms.map(Duration::from_millis).unwrap_or(fallback);
    IntroTimeline {
        garment_delay: pick(config.garment_delay_ms, defaults.garment_delay),
        garment_reveal_timeout: pick(
            config.garment_reveal_timeout_ms,
            defaults.garment_reveal_timeout,
        ),
        assemble_delay: pick(config.assemble_delay_ms, defaults.assemble_delay),
        avatar_delay: pick(config.avatar_delay_ms, defaults.avatar_delay),
        complete_delay: pick(config.complete_delay_ms, defaults.complete_delay),
    }
}

/// Viewer identity from `FASHIONFOT_USER_ID` / `FASHIONFOT_ACCESS_TOKEN`.
/// Both must be non-empty, otherwise the viewer is anonymous.
pub fn viewer_from_env(user_id: Option<String>, access_token: Option<String>) -> ViewerContext {
    match (user_id, access_token) {
        (Some(user_id), Some(access_token))
            if !user_id.trim().is_empty() && !access_token.trim().is_empty() =>
        {
            ViewerContext::signed_in(AuthSession {
                user_id: UserId::from(user_id.trim().to_string()),
                email: None,
                access_token,
            })
        }
        _ => ViewerContext::anonymous(),
    }
}
