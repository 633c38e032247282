//! Sentry auth token resolution from multiple sources

use std::io::IsTerminal;

use log::{debug, warn};

use crate::config::credentials;
use crate::error::{DiscoveryError, Result};
use crate::ui::prompt_token;

/// Token resolution with fallback logic
pub struct TokenResolver {
    batch_mode: bool,
}

impl TokenResolver {
    /// Create a new token resolver; `batch_mode` disables the interactive prompt
    pub fn new(batch_mode: bool) -> Self {
        Self { batch_mode }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument or `SENTRY_AUTH_TOKEN` (clap merges the two)
    /// 2. `sentry.token` from the config file
    /// 3. Interactive prompt, when stdin is a terminal and not in batch mode
    ///
    /// Empty values are treated as absent.
    pub fn resolve(&self, cli_token: Option<&str>, config_token: Option<&str>) -> Result<String> {
        if let Some(token) = non_empty(cli_token) {
            debug!(
                "Using token from CLI argument or {}",
                credentials::TOKEN_ENV_VAR
            );
            return Ok(token.to_string());
        }

        if let Some(token) = non_empty(config_token) {
            debug!("Using token from config file");
            return Ok(token.to_string());
        }

        if !self.batch_mode && std::io::stdin().is_terminal() {
            debug!("No token configured, prompting");
            let token = prompt_token()?;
            if let Some(token) = non_empty(Some(token.as_str())) {
                return Ok(token.to_string());
            }
        }

        Err(DiscoveryError::TokenNotFound(self.token_not_found_message()))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self) -> String {
        format!(
            "No Sentry auth token found. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      sentry-discovery discover --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>\n\
             3. Config file:       sentry.token in .sentry-discovery.yaml\n\
             {}",
            credentials::TOKEN_ENV_VAR,
            if self.batch_mode {
                "\nInteractive prompt is disabled in batch mode."
            } else {
                ""
            }
        )
    }
}

fn non_empty(token: Option<&str>) -> Option<&str> {
    token.map(str::trim).filter(|t| !t.is_empty())
}

/// Check that a token looks like a Sentry auth token.
///
/// Accepts 64-character lowercase hex user tokens and `sntrys_` organization
/// tokens. Callers only warn on a mismatch; the server has the final say.
pub fn validate_token(token: &str) -> bool {
    if token.starts_with(credentials::ORG_TOKEN_PREFIX) {
        return token.len() > 20;
    }
    token.len() == 64
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

/// Log a warning when the token format looks wrong.
///
/// A malformed token is not rejected here and the run goes on; a bad token
/// surfaces as an authentication error on the first request.
pub fn warn_on_suspicious_token(token: &str) {
    if !validate_token(token) {
        warn!("Auth token format looks unusual; continuing anyway");
    }
}
