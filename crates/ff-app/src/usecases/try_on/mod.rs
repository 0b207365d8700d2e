//! Try-on view model.

mod controller;

pub use controller::{CatalogLoad, TryOnController};
