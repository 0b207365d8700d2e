//! FashionFOT VR host: configuration, tracing and dependency wiring around
//! the `ff-*` crates.

pub mod bootstrap;

pub use bootstrap::{init_tracing_subscriber, load_config, run_app};
