//! Team module

mod api;
mod models;

pub use models::Team;
