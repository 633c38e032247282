//! CLI argument parsing

mod common;
mod discover;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;
pub use discover::{ConnectionArgs, DiscoverArgs};

/// Sentry discovery CLI
#[derive(Parser, Debug)]
#[command(name = "sentry-discovery")]
#[command(version)]
#[command(
    about = "Discover organizations, teams and projects of a Sentry instance",
    long_about = None
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Effective log filter
    pub fn effective_log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Discover an organization with its teams and projects
    Discover(DiscoverArgs),

    /// Check that the token can list organizations
    #[command(name = "test-connection")]
    TestConnection(ConnectionArgs),

    /// Write a sample config file
    #[command(name = "init-config")]
    InitConfig {
        /// Destination path
        #[arg(default_value = defaults::SAMPLE_CONFIG_PATH)]
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn test_discover_defaults() {
        let cli = parse(&["sentry-discovery", "discover", "--token", "abc"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(!cli.verbose);
        match cli.command {
            Command::Discover(args) => {
                assert_eq!(args.connection.token.as_deref(), Some("abc"));
                assert_eq!(args.format, OutputFormat::Json);
                assert!(!args.projects_only);
                assert!(!args.teams_only);
                assert!(!args.quiet);
                assert!(!args.connection.batch);
                assert!(args.output.is_none());
                assert!(args.concurrency.is_none());
            }
            other => panic!("Expected Discover, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_all_options() {
        let cli = parse(&[
            "sentry-discovery",
            "discover",
            "--token",
            "abc",
            "--base-url",
            "https://sentry.example.com/api/0",
            "--org",
            "acme",
            "--teams-only",
            "--projects-only",
            "--output",
            "out.yaml",
            "--format",
            "yaml",
            "--timeout",
            "5",
            "--retry-attempts",
            "1",
            "--concurrency",
            "4",
            "--config-file",
            "conf.yaml",
            "--quiet",
            "--batch",
            "-v",
        ]);

        assert!(cli.verbose);
        assert_eq!(cli.effective_log_level(), "debug");
        match cli.command {
            Command::Discover(args) => {
                assert_eq!(
                    args.connection.base_url.as_deref(),
                    Some("https://sentry.example.com/api/0")
                );
                assert_eq!(args.org.as_deref(), Some("acme"));
                assert!(args.teams_only && args.projects_only);
                assert_eq!(args.output, Some(PathBuf::from("out.yaml")));
                assert_eq!(args.format, OutputFormat::Yaml);
                assert_eq!(args.connection.timeout, Some(5));
                assert_eq!(args.connection.retry_attempts, Some(1));
                assert_eq!(args.concurrency, Some(4));
                assert_eq!(
                    args.connection.config_file,
                    Some(PathBuf::from("conf.yaml"))
                );
                assert!(args.quiet);
                assert!(args.connection.batch);
            }
            other => panic!("Expected Discover, got {:?}", other),
        }
    }

    #[test]
    fn test_global_log_level_after_subcommand() {
        let cli = parse(&["sentry-discovery", "test-connection", "--log-level", "info"]);
        assert_eq!(cli.effective_log_level(), "info");
        assert!(matches!(cli.command, Command::TestConnection(_)));
    }

    #[test]
    fn test_init_config_default_path() {
        let cli = parse(&["sentry-discovery", "init-config"]);
        match cli.command {
            Command::InitConfig { path } => {
                assert_eq!(path, PathBuf::from(".sentry-discovery.yaml"));
            }
            other => panic!("Expected InitConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Cli::try_parse_from(["sentry-discovery", "discover", "--format", "csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["sentry-discovery"]).is_err());
    }
}
