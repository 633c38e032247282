//! Command handlers

use std::path::Path;

use log::{debug, info};

use crate::cli::{ConnectionArgs, DiscoverArgs};
use crate::discovery::{Discovery, DiscoveryOptions};
use crate::error::{DiscoveryError, Result};
use crate::output::{print_summary, write_snapshot};
use crate::sentry::{warn_on_suspicious_token, SentryClient, TokenResolver};
use crate::settings::{ConfigStore, DiscoveryConfig, SentrySettings};
use crate::ui::{clear_progress, create_progress_bar, finish_progress, set_progress};

/// Merge config file values with CLI flags and environment (CLI wins)
fn resolve_settings(args: &ConnectionArgs) -> Result<SentrySettings> {
    let config = ConfigStore::new(args.config_file.clone()).load()?;
    let mut settings = config.sentry;

    if let Some(base_url) = &args.base_url {
        settings.base_url = base_url.clone();
    }
    if let Some(timeout) = args.timeout {
        settings.timeout = timeout;
    }
    if let Some(retry_attempts) = args.retry_attempts {
        settings.retry_attempts = retry_attempts;
    }

    let token =
        TokenResolver::new(args.batch).resolve(args.token.as_deref(), settings.token.as_deref())?;
    settings.token = Some(token);

    Ok(settings)
}

/// Validate settings and build the client
fn build_client(settings: SentrySettings) -> Result<SentryClient> {
    let issues = DiscoveryConfig {
        sentry: settings.clone(),
    }
    .validate();
    if !issues.is_empty() {
        return Err(DiscoveryError::Config(issues.join("; ")));
    }

    let token = settings.token.as_deref().unwrap_or_default();
    warn_on_suspicious_token(token);

    debug!(
        "Using base_url={}, timeout={}s, retry_attempts={}, concurrency={}",
        settings.base_url, settings.timeout, settings.retry_attempts, settings.concurrency
    );
    SentryClient::with_options(token, &settings.base_url, settings.client_options())
}

/// Run the discover command
pub async fn run_discover_command(args: &DiscoverArgs) -> Result<()> {
    let mut settings = resolve_settings(&args.connection)?;
    if let Some(org) = &args.org {
        settings.organization = Some(org.clone());
    }
    if let Some(concurrency) = args.concurrency {
        settings.concurrency = concurrency;
    }

    let options = DiscoveryOptions {
        organization: settings.organization.clone(),
        projects_only: args.projects_only,
        teams_only: args.teams_only,
    };
    let discovery = Discovery::new(build_client(settings)?);

    let bar = create_progress_bar(args.quiet);
    let on_progress: &dyn Fn(u8) = &|percent| set_progress(bar.as_ref(), percent);
    let result = discovery.discover(&options, Some(on_progress)).await;
    discovery.close();

    let snapshot = match result {
        Ok(snapshot) if snapshot.is_empty() => {
            clear_progress(bar);
            return Err(DiscoveryError::EmptySnapshot);
        }
        Ok(snapshot) => snapshot,
        Err(e) => {
            clear_progress(bar);
            return Err(e);
        }
    };
    finish_progress(bar, "Discovery complete");

    if !args.quiet {
        print_summary(&snapshot.summary());
    }

    write_snapshot(&snapshot, args.format, args.output.as_deref())
}

/// Run the test-connection command
pub async fn run_test_connection_command(args: &ConnectionArgs) -> Result<()> {
    let settings = resolve_settings(args)?;
    let base_url = settings.base_url.clone();
    let client = build_client(settings)?;

    info!("Testing Sentry API connection");
    if client.test_connection().await {
        println!("Connection to {} successful", base_url);
        Ok(())
    } else {
        Err(DiscoveryError::ConnectionTest(base_url))
    }
}

/// Run the init-config command
pub fn run_init_config_command(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(DiscoveryError::Config(format!(
            "{} already exists, refusing to overwrite",
            path.display()
        )));
    }

    ConfigStore::save(path, &DiscoveryConfig::sample())?;
    println!("Sample configuration written to {}", path.display());
    Ok(())
}
