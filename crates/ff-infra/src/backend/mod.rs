//! Adapters for the hosted backend's REST surface (PostgREST-style tables).

mod client;
pub mod mappers;
pub mod models;
pub mod ports;
mod repositories;

pub use client::RestClient;
pub use repositories::{RestItemRepository, RestLeadRepository, RestOutfitRepository};
