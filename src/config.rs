/// Configuration constants for the Sentry API
pub mod api {
    /// Default Sentry API base URL (SaaS)
    pub const DEFAULT_BASE_URL: &str = "https://sentry.io/api/0";

    /// Organizations endpoint segment
    pub const ORGANIZATIONS: &str = "organizations";

    /// Teams endpoint segment
    pub const TEAMS: &str = "teams";

    /// Team members endpoint segment
    pub const MEMBERS: &str = "members";

    /// Projects endpoint segment
    pub const PROJECTS: &str = "projects";

    /// User-Agent sent with every request
    pub const USER_AGENT: &str = concat!("sentry-discovery/", env!("CARGO_PKG_VERSION"));

    /// Minimum spacing between two requests of one client
    pub const MIN_REQUEST_INTERVAL_MS: u64 = 100;

    /// Per-request timeout
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Retries after the first attempt for timeouts and connection errors
    pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

    /// Wait applied to a 429 without a usable Retry-After header
    pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

    /// Sub-fetches in flight per resource list (1 = strictly sequential)
    pub const DEFAULT_CONCURRENCY: usize = 1;
}

/// Configuration constants for credentials and environment
pub mod credentials {
    /// Environment variable holding the auth token
    pub const TOKEN_ENV_VAR: &str = "SENTRY_AUTH_TOKEN";

    /// Environment variable holding the API base URL
    pub const BASE_URL_ENV_VAR: &str = "SENTRY_BASE_URL";

    /// Environment variable holding the organization slug
    pub const ORG_ENV_VAR: &str = "SENTRY_ORG";

    /// Prefix of organization auth tokens
    pub const ORG_TOKEN_PREFIX: &str = "sntrys_";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default snapshot format
    pub const OUTPUT_FORMAT: &str = "json";

    /// Config file names searched in the working directory, then in HOME
    pub const CONFIG_FILE_NAMES: &[&str] = &[".sentry-discovery.yaml", ".sentry-discovery.yml"];

    /// Path written by `init-config` when none is given
    pub const SAMPLE_CONFIG_PATH: &str = ".sentry-discovery.yaml";
}
