use std::collections::HashMap;
use std::sync::Arc;

use ff_core::ports::{TimerFired, TimerPort};
use ff_core::TimerId;
use tokio::sync::{mpsc, Mutex};
use tokio::time::{sleep, Duration};
use tracing::debug;

/// Tokio-backed one-shot timers. Elapsed ids are sent on the channel given to [`Timer::new`].
pub struct Timer {
    timers: Arc<Mutex<HashMap<TimerId, tokio::task::AbortHandle>>>,
    fired_tx: mpsc::Sender<TimerFired>,
}

impl Timer {
    pub fn new(fired_tx: mpsc::Sender<TimerFired>) -> Self {
        Self {
            timers: Arc::new(Mutex::new(HashMap::new())),
            fired_tx,
        }
    }

    pub async fn pending(&self) -> usize {
        self.timers.lock().await.len()
    }
}

#[async_trait::async_trait]
impl TimerPort for Timer {
    async fn start(&mut self, timer_id: &TimerId, delay: Duration) -> anyhow::Result<()> {
        let timers = Arc::clone(&self.timers);
        let fired_tx = self.fired_tx.clone();
        let timer_id_clone = timer_id.clone();

        let mut timers_guard = self.timers.lock().await;
        if let Some(existing) = timers_guard.remove(timer_id) {
            existing.abort();
        }

        let handle = tokio::spawn(async move {
            sleep(delay).await;
            {
                let mut timers_guard = timers.lock().await;
                timers_guard.remove(&timer_id_clone);
            }
            let _ = fired_tx
                .send(TimerFired {
                    timer_id: timer_id_clone,
                })
                .await;
        });

        timers_guard.insert(timer_id.clone(), handle.abort_handle());
        debug!(timer_id = %timer_id, delay_ms = delay.as_millis() as u64, "timer started");
        Ok(())
    }

    async fn stop(&mut self, timer_id: &TimerId) -> anyhow::Result<()> {
        let mut timers_guard = self.timers.lock().await;
        if let Some(handle) = timers_guard.remove(timer_id) {
            handle.abort();
            debug!(timer_id = %timer_id, "timer stopped");
        }
        Ok(())
    }

    async fn stop_all(&mut self) -> anyhow::Result<()> {
        let mut timers_guard = self.timers.lock().await;
        let count = timers_guard.len();
        for (_, handle) in timers_guard.drain() {
            handle.abort();
        }
        if count > 0 {
            debug!(count, "all timers stopped");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, Duration};

    #[tokio::test]
    async fn start_sends_fired_after_delay() -> anyhow::Result<()> {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = Timer::new(tx);
        let timer_id = TimerId::from("intro");

        timer.start(&timer_id, Duration::from_millis(500)).await?;
        assert_eq!(timer.pending().await, 1);
        advance(Duration::from_millis(500)).await;
        tokio::task::yield_now().await;

        assert_eq!(rx.recv().await, Some(TimerFired { timer_id }));
        assert_eq!(timer.pending().await, 0);
        Ok(())
    }

    #[tokio::test]
    async fn stop_cancels_timer() -> anyhow::Result<()> {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = Timer::new(tx);
        let timer_id = TimerId::from("intro");

        timer.start(&timer_id, Duration::from_millis(500)).await?;
        timer.stop(&timer_id).await?;
        advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;

        assert!(rx.try_recv().is_err());
        assert_eq!(timer.pending().await, 0);
        Ok(())
    }

    #[tokio::test]
    async fn start_replaces_existing_timer_with_same_id() -> anyhow::Result<()> {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = Timer::new(tx);
        let timer_id = TimerId::from("intro");

        timer.start(&timer_id, Duration::from_millis(500)).await?;
        timer.start(&timer_id, Duration::from_millis(1000)).await?;
        advance(Duration::from_millis(500)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        advance(Duration::from_millis(500)).await;
        tokio::task::yield_now().await;
        assert_eq!(rx.recv().await, Some(TimerFired { timer_id }));
        Ok(())
    }

    #[tokio::test]
    async fn stop_all_silences_every_pending_timer() -> anyhow::Result<()> {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = Timer::new(tx);

        timer.start(&TimerId::from("a"), Duration::from_millis(100)).await?;
        timer.start(&TimerId::from("b"), Duration::from_millis(200)).await?;
        timer.stop_all().await?;
        advance(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;

        assert!(rx.try_recv().is_err());
        assert_eq!(timer.pending().await, 0);
        Ok(())
    }
}
