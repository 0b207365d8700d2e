//! Intro timeline orchestration.

mod director;

pub use director::{IntroDirector, IntroError};
