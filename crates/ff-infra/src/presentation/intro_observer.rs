use std::sync::Arc;

use ff_core::ports::IntroObserverPort;
use tokio::sync::Notify;
use tracing::info;

/// Logs intro completion and wakes whoever awaits [`LoggingIntroObserver::completed`].
#[derive(Debug, Default)]
pub struct LoggingIntroObserver {
    done: Arc<Notify>,
}

impl LoggingIntroObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn completed(&self) {
        self.done.notified().await;
    }
}

impl IntroObserverPort for LoggingIntroObserver {
    fn on_intro_complete(&self) {
        info!("intro complete, revealing landing content");
        self.done.notify_one();
    }
}
