pub mod backend;
pub mod presentation;
pub mod storage;
pub mod time;

pub use backend::{
    RestClient, RestItemRepository, RestLeadRepository, RestOutfitRepository,
};
pub use presentation::{LoggingIntroObserver, StaticMotionPreference, TracingRenderSurface};
pub use storage::RestObjectStorage;
pub use time::{SystemClock, Timer};
