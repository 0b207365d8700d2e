mod item_repo;
mod lead_repo;
mod outfit_repo;

pub use item_repo::RestItemRepository;
pub use lead_repo::RestLeadRepository;
pub use outfit_repo::RestOutfitRepository;
