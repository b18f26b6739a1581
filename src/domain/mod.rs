// Domain layer: marketplace entities and the pure search/ranking logic.
pub mod models;
pub mod services;
