//! Clothing catalog: the items a user uploaded, and the carousel view over them.

mod item;
mod window;

pub use item::{is_absolute_reference, ClothingItem, ItemMetadata};
pub use window::{window, CatalogWindow, CAROUSEL_PAGE_SIZE};
