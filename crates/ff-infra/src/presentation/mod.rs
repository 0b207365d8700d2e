//! Headless stand-ins for the browser-side collaborators: the render
//! surface, the reduced-motion media query and the intro's parent view.

mod intro_observer;
mod motion;
mod render_surface;

pub use intro_observer::LoggingIntroObserver;
pub use motion::StaticMotionPreference;
pub use render_surface::TracingRenderSurface;
