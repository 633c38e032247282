//! Config file data models

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::sentry::{ClientOptions, RetryPolicy};

/// Top-level config file structure
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub sentry: SentrySettings,
}

/// `sentry:` section of the config file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SentrySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Per-request timeout in seconds
    pub timeout: u64,
    pub retry_attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rate_limit_waits: Option<u32>,
    pub concurrency: usize,
}

impl Default for SentrySettings {
    fn default() -> Self {
        Self {
            token: None,
            base_url: api::DEFAULT_BASE_URL.to_string(),
            organization: None,
            timeout: api::DEFAULT_TIMEOUT_SECS,
            retry_attempts: api::DEFAULT_RETRY_ATTEMPTS,
            max_rate_limit_waits: None,
            concurrency: api::DEFAULT_CONCURRENCY,
        }
    }
}

impl SentrySettings {
    /// Client tunables derived from these settings
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: Duration::from_secs(self.timeout),
            retry: RetryPolicy {
                retry_attempts: self.retry_attempts,
                max_rate_limit_waits: self.max_rate_limit_waits,
            },
            concurrency: self.concurrency,
            ..ClientOptions::default()
        }
    }
}

impl DiscoveryConfig {
    /// Starter config written by `init-config`
    pub fn sample() -> Self {
        Self {
            sentry: SentrySettings {
                token: Some("your-sentry-auth-token".to_string()),
                organization: Some("your-org-slug".to_string()),
                ..SentrySettings::default()
            },
        }
    }

    /// List configuration problems; empty when the config is usable
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let sentry = &self.sentry;

        if sentry.token.as_deref().map_or(true, |t| t.trim().is_empty()) {
            issues.push("Sentry auth token is required".to_string());
        }
        if sentry.base_url.trim().is_empty() {
            issues.push("Sentry base URL is required".to_string());
        }
        if sentry.timeout == 0 {
            issues.push("Timeout must be positive".to_string());
        }
        if sentry.concurrency == 0 {
            issues.push("Concurrency must be at least 1".to_string());
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DiscoveryConfig::default();
        assert_eq!(config.sentry.base_url, "https://sentry.io/api/0");
        assert_eq!(config.sentry.timeout, 30);
        assert_eq!(config.sentry.retry_attempts, 3);
        assert_eq!(config.sentry.concurrency, 1);
        assert!(config.sentry.token.is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "sentry:\n  token: abc\n  timeout: 10\n";
        let config: DiscoveryConfig = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.sentry.token.as_deref(), Some("abc"));
        assert_eq!(config.sentry.timeout, 10);
        assert_eq!(config.sentry.base_url, "https://sentry.io/api/0");
    }

    #[test]
    fn test_validate_default_requires_token() {
        let issues = DiscoveryConfig::default().validate();
        assert_eq!(issues, vec!["Sentry auth token is required".to_string()]);
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let config = DiscoveryConfig {
            sentry: SentrySettings {
                token: Some(" ".to_string()),
                base_url: String::new(),
                timeout: 0,
                concurrency: 0,
                ..SentrySettings::default()
            },
        };
        assert_eq!(config.validate().len(), 4);
    }

    #[test]
    fn test_sample_is_valid() {
        assert!(DiscoveryConfig::sample().validate().is_empty());
    }

    #[test]
    fn test_client_options() {
        let settings = SentrySettings {
            timeout: 5,
            retry_attempts: 1,
            max_rate_limit_waits: Some(4),
            concurrency: 8,
            ..SentrySettings::default()
        };
        let options = settings.client_options();
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert_eq!(options.retry.retry_attempts, 1);
        assert_eq!(options.retry.max_rate_limit_waits, Some(4));
        assert_eq!(options.concurrency, 8);
        assert_eq!(options.min_request_interval, Duration::from_millis(100));
    }
}
