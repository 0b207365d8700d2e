mod item_mapper;
mod lead_mapper;
mod outfit_mapper;

pub use item_mapper::ItemRowMapper;
pub use lead_mapper::LeadRowMapper;
pub use outfit_mapper::OutfitRowMapper;
