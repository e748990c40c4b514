// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use commands::{handle_config_update_command, handle_fetch_command, handle_list_config_command};
use logging::setup_logging;
use nba_stats::config::Config;
use nba_stats::error::AppError;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        return handle_list_config_command().await;
    }
    if args.is_config_command() {
        return handle_config_update_command(&args).await;
    }

    let config = Config::load().await?;

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    info!("Logging to {log_file_path}");

    let result = handle_fetch_command(&args, &config).await;
    if let Err(e) = &result {
        error!("{e}");
    }
    result
}
