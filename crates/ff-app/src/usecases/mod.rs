pub mod intro;
mod load_catalog;
mod save_outfit;
mod submit_lead;
pub mod try_on;
mod upload_clothing_item;

#[cfg(test)]
pub(crate) mod test_support;

pub use intro::{IntroDirector, IntroError};
pub use load_catalog::LoadCatalog;
pub use save_outfit::SaveOutfit;
pub use submit_lead::SubmitLead;
pub use try_on::{CatalogLoad, TryOnController};
pub use upload_clothing_item::UploadClothingItem;
