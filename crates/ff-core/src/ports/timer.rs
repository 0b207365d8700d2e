use std::time::Duration;

use crate::ids::TimerId;

/// Delivered on the adapter's channel when a timer elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerFired {
    pub timer_id: TimerId,
}

/// One-shot timers keyed by id. Starting an id that is pending replaces it.
#[async_trait::async_trait]
pub trait TimerPort: Send {
    async fn start(&mut self, timer_id: &TimerId, delay: Duration) -> anyhow::Result<()>;
    async fn stop(&mut self, timer_id: &TimerId) -> anyhow::Result<()>;
    /// Cancels every pending timer; none of them will fire afterwards.
    async fn stop_all(&mut self) -> anyhow::Result<()>;
}
