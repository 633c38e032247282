//! Discovery CLI arguments

use std::path::PathBuf;

use clap::{Args, Parser};

use super::common::OutputFormat;
use crate::config::{credentials, defaults};

/// Connection arguments shared by `discover` and `test-connection`
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Sentry auth token (overrides the config file)
    #[arg(short = 't', long, env = credentials::TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Sentry API base URL, e.g. https://sentry.example.com/api/0
    #[arg(long, env = credentials::BASE_URL_ENV_VAR)]
    pub base_url: Option<String>,

    /// Config file (default: .sentry-discovery.yaml in the working or home directory)
    #[arg(short = 'c', long)]
    pub config_file: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Retries for timeouts and connection errors
    #[arg(long)]
    pub retry_attempts: Option<u32>,

    /// Never prompt for a missing token
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}

/// Arguments for the 'discover' subcommand
#[derive(Parser, Debug, Clone)]
#[command(after_help = "EXAMPLES:\n  \
        sentry-discovery discover --org my-org\n  \
        sentry-discovery discover --teams-only --format yaml\n  \
        sentry-discovery discover --projects-only --output snapshot.json --concurrency 4")]
pub struct DiscoverArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Organization slug (default: first organization visible to the token)
    #[arg(short = 'o', long, env = credentials::ORG_ENV_VAR)]
    pub org: Option<String>,

    /// Discover projects only
    #[arg(long, default_value_t = false)]
    pub projects_only: bool,

    /// Discover teams only
    #[arg(long, default_value_t = false)]
    pub teams_only: bool,

    /// Write the snapshot to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Snapshot format
    #[arg(short = 'f', long, value_enum, default_value = defaults::OUTPUT_FORMAT)]
    pub format: OutputFormat,

    /// Sub-requests in flight per resource list
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Hide progress bar and summary
    #[arg(short = 'q', long, default_value_t = false)]
    pub quiet: bool,
}
