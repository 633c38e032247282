//! Sentry API client module
//!
//! This module provides the request executor and the read-only traversal of
//! organizations, teams and projects.

mod client;
mod credentials;
pub mod organizations;
pub mod projects;
mod rate_limit;
pub mod retry;
pub mod teams;
pub mod traits;

pub use client::{ClientOptions, SentryClient};
pub use credentials::{validate_token, warn_on_suspicious_token, TokenResolver};
pub use organizations::Organization;
pub use projects::Project;
pub use rate_limit::RequestPacer;
pub use retry::{tokio_sleep, RetryPolicy, SleepFn};
pub use teams::Team;
pub use traits::{Listing, SentryResource};
