//! YAML configuration file
//!
//! Loaded from an explicit path or discovered in the working directory and
//! home directory. CLI flags and environment variables take precedence over
//! file values; see `commands`.

mod models;
mod store;

pub use models::{DiscoveryConfig, SentrySettings};
pub use store::ConfigStore;
