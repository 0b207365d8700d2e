mod mapper;

pub use mapper::{InsertMapper, RowMapper};
