//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! adapters (hosted backend, object storage, timers, render surface). The
//! core never talks to any of those directly.

mod catalog;
mod clock;
mod lead;
mod motion;
mod object_storage;
mod outfit;
mod render_surface;
mod timer;


pub use catalog::ItemRepositoryPort;
pub use clock::ClockPort;
pub use lead::LeadRepositoryPort;
pub use motion::MotionPreferencePort;
pub use object_storage::ObjectStoragePort;
pub use outfit::OutfitRepositoryPort;
pub use render_surface::{IntroObserverPort, RenderSurfacePort};
pub use timer::{TimerFired, TimerPort};
