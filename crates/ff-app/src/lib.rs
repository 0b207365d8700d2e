//! FashionFOT VR application layer
//!
//! Use cases that drive the core domain through its ports: loading a user's
//! catalog, saving outfits, uploading clothing, contact leads, the intro
//! timeline and the try-on view model.

pub mod usecases;

pub use usecases::{
    CatalogLoad, IntroDirector, IntroError, LoadCatalog, SaveOutfit, SubmitLead, TryOnController,
    UploadClothingItem,
};
