//! Intro director.
//!
//! Drives [`IntroStateMachine`] from a single entry point, [`IntroDirector::advance`],
//! and executes the actions it returns against the timer, the render surface
//! and the completion observer.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, info_span, Instrument};

use ff_core::intro::{
    AnimationStage, IntroAction, IntroEvent, IntroLayout, IntroState, IntroStateMachine,
    IntroTimeline,
};
use ff_core::ports::{
    IntroObserverPort, MotionPreferencePort, RenderSurfacePort, TimerFired, TimerPort,
};
use ff_core::TimerId;

const TIMER_PREFIX: &str = "intro:";

#[derive(Debug, thiserror::Error)]
pub enum IntroError {
    #[error("intro timer failed: {0}")]
    Timer(#[source] anyhow::Error),
}

pub struct IntroDirector {
    state: Mutex<IntroState>,
    timeline: IntroTimeline,
    layout: IntroLayout,
    timer: Arc<Mutex<dyn TimerPort>>,
    motion: Arc<dyn MotionPreferencePort>,
    surface: Arc<dyn RenderSurfacePort>,
    observer: Option<Arc<dyn IntroObserverPort>>,
}

impl IntroDirector {
    pub fn new(
        timeline: IntroTimeline,
        layout: IntroLayout,
        timer: Arc<Mutex<dyn TimerPort>>,
        motion: Arc<dyn MotionPreferencePort>,
        surface: Arc<dyn RenderSurfacePort>,
        observer: Option<Arc<dyn IntroObserverPort>>,
    ) -> Self {
        Self {
            state: Mutex::new(IntroState::new()),
            timeline,
            layout,
            timer,
            motion,
            surface,
            observer,
        }
    }

    pub async fn stage(&self) -> AnimationStage {
        self.state.lock().await.stage
    }

    pub async fn state(&self) -> IntroState {
        *self.state.lock().await
    }

    pub async fn mount(&self) -> Result<AnimationStage, IntroError> {
        self.advance(IntroEvent::Mount).await
    }

    /// Reported by the render surface when the garment reveal finished early.
    pub async fn garment_revealed(&self) -> Result<AnimationStage, IntroError> {
        self.advance(IntroEvent::GarmentRevealed).await
    }

    /// Cancels every pending transition. Later events are ignored.
    pub async fn teardown(&self) -> Result<AnimationStage, IntroError> {
        self.advance(IntroEvent::Teardown).await
    }

    /// Translates a fired timer back into the stage it was armed for.
    pub async fn on_timer_fired(&self, fired: TimerFired) -> Result<AnimationStage, IntroError> {
        match stage_for_timer(&fired.timer_id) {
            Some(armed_for) => self.advance(IntroEvent::TimerElapsed { armed_for }).await,
            None => {
                debug!(timer_id = %fired.timer_id, "ignoring foreign timer");
                Ok(self.stage().await)
            }
        }
    }

    /// Feeds one event through the machine and runs the resulting actions.
    ///
    /// Calls are serialized; the motion preference is read at every step so
    /// a change made mid-intro applies at the garment branch.
    pub async fn advance(&self, event: IntroEvent) -> Result<AnimationStage, IntroError> {
        let mut state = self.state.lock().await;
        let span = info_span!("usecase.intro_director.advance", event = ?event);
        async {
            let from = *state;
            let motion = self.motion.motion_preference();
            let (next, actions) =
                IntroStateMachine::transition(from, event, &self.timeline, motion);
            if next != from {
                debug!(from = ?from.stage, to = ?next.stage, ?motion, "intro state transition");
            }
            *state = next;
            self.execute_actions(actions).await?;
            Ok(next.stage)
        }
        .instrument(span)
        .await
    }

    /// Pumps fired timers into the machine until the intro settles or the
    /// channel closes.
    pub async fn run(
        self: Arc<Self>,
        mut fired_rx: mpsc::Receiver<TimerFired>,
    ) -> Result<AnimationStage, IntroError> {
        while let Some(fired) = fired_rx.recv().await {
            self.on_timer_fired(fired).await?;
            if self.state().await.is_settled() {
                break;
            }
        }
        Ok(self.stage().await)
    }

    async fn execute_actions(&self, actions: Vec<IntroAction>) -> Result<(), IntroError> {
        for action in actions {
            match action {
                IntroAction::ArmTimer { armed_for, delay } => {
                    self.timer
                        .lock()
                        .await
                        .start(&timer_id_for(armed_for), delay)
                        .await
                        .map_err(IntroError::Timer)?;
                }
                IntroAction::CancelTimers => {
                    self.timer
                        .lock()
                        .await
                        .stop_all()
                        .await
                        .map_err(IntroError::Timer)?;
                }
                IntroAction::EnterStage(stage) => {
                    info!(stage = %stage, "intro stage entered");
                    self.surface.present_intro(&self.layout.pose(stage));
                }
                IntroAction::NotifyComplete => {
                    if let Some(observer) = &self.observer {
                        observer.on_intro_complete();
                    }
                }
            }
        }
        Ok(())
    }
}

fn timer_id_for(stage: AnimationStage) -> TimerId {
    TimerId::from(format!("{}{}", TIMER_PREFIX, stage.as_str()))
}

fn stage_for_timer(timer_id: &TimerId) -> Option<AnimationStage> {
    let name = timer_id.as_str().strip_prefix(TIMER_PREFIX)?;
    AnimationStage::ORDER
        .into_iter()
        .find(|stage| stage.as_str() == name)
}
