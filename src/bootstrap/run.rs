//! Headless run loop: play the intro, then show the viewer's try-on scene.

use std::sync::Arc;

use ff_app::{CatalogLoad, IntroDirector, TryOnController};
use ff_core::config::AppConfig;
use ff_core::intro::{AnimationStage, IntroLayout};
use ff_core::ports::TimerPort;
use ff_infra::{LoggingIntroObserver, Timer};
use tokio::sync::{mpsc, Mutex};
use tracing::{info, warn};

use super::wiring::{viewer_from_env, wire_dependencies, AppDeps};

const TIMER_CHANNEL_CAPACITY: usize = 16;

pub async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let deps = wire_dependencies(&config)?;

    let stage = play_intro(&deps).await?;
    if stage != AnimationStage::Complete {
        info!(stage = %stage, "intro interrupted, shutting down");
        return Ok(());
    }

    let viewer = viewer_from_env(
        std::env::var("FASHIONFOT_USER_ID").ok(),
        std::env::var("FASHIONFOT_ACCESS_TOKEN").ok(),
    );
    let controller = TryOnController::new(
        viewer,
        deps.load_catalog.clone(),
        deps.save_outfit.clone(),
        deps.surface.clone(),
    );

    if controller.viewer().is_signed_in() {
        match controller.load_catalog().await {
            Ok(CatalogLoad::Loaded(count)) => info!(count, "catalog available for try-on"),
            Ok(CatalogLoad::Stale) => {}
            Err(err) => warn!(error = %err, "catalog unavailable"),
        }
    } else {
        info!("no identity configured, skipping catalog");
    }

    controller.present().await;
    controller.dismiss();
    Ok(())
}

/// Runs the intro to completion, or tears it down on Ctrl-C.
async fn play_intro(deps: &AppDeps) -> anyhow::Result<AnimationStage> {
    let (fired_tx, fired_rx) = mpsc::channel(TIMER_CHANNEL_CAPACITY);
    let timer: Arc<Mutex<dyn TimerPort>> = Arc::new(Mutex::new(Timer::new(fired_tx)));
    let observer = Arc::new(LoggingIntroObserver::new());

    let director = Arc::new(IntroDirector::new(
        deps.timeline,
        IntroLayout::default(),
        timer,
        deps.motion.clone(),
        deps.surface.clone(),
        Some(observer),
    ));

    director.mount().await?;
    let stage = tokio::select! {
        result = director.clone().run(fired_rx) => result?,
        _ = tokio::signal::ctrl_c() => director.teardown().await?,
    };
    Ok(stage)
}
