//! Intro state machine.
//!
//! Pure transition function: the director feeds events in and executes the
//! returned actions (arming timers, notifying the observer).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::stage::{AnimationStage, MotionPreference};
use super::timeline::IntroTimeline;

/// Inputs to the intro machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntroEvent {
    /// The view mounted; start the countdown to the garment reveal.
    Mount,
    /// A timer armed while in `armed_for` elapsed.
    TimerElapsed { armed_for: AnimationStage },
    /// The render surface finished revealing the garment before its time-box.
    GarmentRevealed,
    /// The view is going away.
    Teardown,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntroAction {
    ArmTimer {
        armed_for: AnimationStage,
        delay: Duration,
    },
    CancelTimers,
    EnterStage(AnimationStage),
    NotifyComplete,
}

/// Machine state: current stage plus the one-shot guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntroState {
    pub stage: AnimationStage,
    pub mounted: bool,
    pub torn_down: bool,
    pub completion_notified: bool,
}

impl IntroState {
    pub fn new() -> Self {
        Self::default()
    }

    /// No further transitions can happen.
    pub fn is_settled(&self) -> bool {
        self.torn_down || self.stage.is_terminal()
    }
}

/// Pure intro state machine.
pub struct IntroStateMachine;

impl IntroStateMachine {
    pub fn transition(
        state: IntroState,
        event: IntroEvent,
        timeline: &IntroTimeline,
        motion: MotionPreference,
    ) -> (IntroState, Vec<IntroAction>) {
        if state.torn_down {
            return (state, Vec::new());
        }

        match (state.stage, event) {
            (_, IntroEvent::Teardown) => (
                IntroState {
                    torn_down: true,
                    ..state
                },
                vec![IntroAction::CancelTimers],
            ),
            (AnimationStage::Idle, IntroEvent::Mount) if !state.mounted => (
                IntroState {
                    mounted: true,
                    ..state
                },
                vec![IntroAction::ArmTimer {
                    armed_for: AnimationStage::Idle,
                    delay: timeline.garment_delay,
                }],
            ),
            (
                AnimationStage::Idle,
                IntroEvent::TimerElapsed {
                    armed_for: AnimationStage::Idle,
                },
            ) if state.mounted => Self::enter(
                state,
                AnimationStage::Garment,
                Some(timeline.garment_reveal_timeout),
            ),
            (AnimationStage::Garment, IntroEvent::GarmentRevealed)
            | (
                AnimationStage::Garment,
                IntroEvent::TimerElapsed {
                    armed_for: AnimationStage::Garment,
                },
            ) => {
                let (next, delay) = match motion {
                    MotionPreference::Reduced => (AnimationStage::Complete, None),
                    MotionPreference::Full => {
                        (AnimationStage::Fragment, Some(timeline.assemble_delay))
                    }
                };
                let (state, mut actions) = Self::enter(state, next, delay);
                // The reveal may beat its time-box; drop the pending one.
                actions.insert(0, IntroAction::CancelTimers);
                (state, actions)
            }
            (
                AnimationStage::Fragment,
                IntroEvent::TimerElapsed {
                    armed_for: AnimationStage::Fragment,
                },
            ) => Self::enter(state, AnimationStage::Assemble, Some(timeline.avatar_delay)),
            (
                AnimationStage::Assemble,
                IntroEvent::TimerElapsed {
                    armed_for: AnimationStage::Assemble,
                },
            ) => Self::enter(state, AnimationStage::Avatar, Some(timeline.complete_delay)),
            (
                AnimationStage::Avatar,
                IntroEvent::TimerElapsed {
                    armed_for: AnimationStage::Avatar,
                },
            ) => Self::enter(state, AnimationStage::Complete, None),
            // Stale timers, duplicate reveals, events after completion.
            _ => (state, Vec::new()),
        }
    }

    fn enter(
        state: IntroState,
        stage: AnimationStage,
        next_delay: Option<Duration>,
    ) -> (IntroState, Vec<IntroAction>) {
        let mut next = IntroState { stage, ..state };
        let mut actions = vec![IntroAction::EnterStage(stage)];

        if let Some(delay) = next_delay {
            actions.push(IntroAction::ArmTimer {
                armed_for: stage,
                delay,
            });
        }

        if stage.is_terminal() && !next.completion_notified {
            next.completion_notified = true;
            actions.push(IntroAction::NotifyComplete);
        }

        (next, actions)
    }
}
