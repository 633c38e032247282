//! sentry-discovery - Main entry point

use clap::Parser;
use log::info;

use sentry_discovery::{
    run_discover_command, run_init_config_command, run_test_connection_command, Cli, Command,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.effective_log_level()),
    )
    .init();

    info!("Starting sentry-discovery v{}", env!("CARGO_PKG_VERSION"));

    let result = match &cli.command {
        Command::Discover(args) => run_discover_command(args).await,
        Command::TestConnection(args) => run_test_connection_command(args).await,
        Command::InitConfig { path } => run_init_config_command(path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
