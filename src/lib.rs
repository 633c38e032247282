//! sentry-discovery - Discover the resource graph of a Sentry instance
//!
//! A client and CLI that walks an organization's teams (with members) and
//! projects (with team assignments and details) over the Sentry REST API and
//! produces a single JSON snapshot.
//!
//! # Features
//!
//! - Minimum-interval request pacing per client
//! - `Retry-After` handling for 429 responses
//! - Exponential backoff for timeouts and connection failures
//! - Optional bounded, order-preserving fan-out of sub-requests
//! - JSON or YAML output
//!
//! # Example
//!
//! ```bash
//! # Discover the first organization visible to the token
//! export SENTRY_AUTH_TOKEN=<TOKEN>
//! sentry-discovery discover
//!
//! # Discover teams of a specific organization on a self-hosted instance
//! sentry-discovery discover --org my-org --teams-only \
//!     --base-url https://sentry.example.com/api/0
//!
//! # Check the token
//! sentry-discovery test-connection
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod sentry;
pub mod settings;
pub mod ui;

pub use cli::{Cli, Command, ConnectionArgs, DiscoverArgs, OutputFormat};
pub use commands::{run_discover_command, run_init_config_command, run_test_connection_command};
pub use discovery::{Discovery, DiscoveryOptions, Snapshot, SnapshotSummary};
pub use error::{DiscoveryError, Result};
pub use sentry::{
    ClientOptions, Listing, Organization, Project, RetryPolicy, SentryClient, SentryResource,
    Team, TokenResolver,
};
pub use settings::{ConfigStore, DiscoveryConfig, SentrySettings};
