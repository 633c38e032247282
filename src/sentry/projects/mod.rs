//! Project module

mod api;
mod models;

pub use models::{Project, UNKNOWN_PLATFORM, UNKNOWN_STATUS};
