use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use localshort::cli::Cli;
use localshort::config::{get_config, init_config, init_config_from};
use localshort::interfaces::cli::run_cli_command;
use localshort::system::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match &cli.config {
        Some(path) => init_config_from(path),
        None => init_config(),
    }
    let config = get_config();

    let _log_guard = match init_logging(&config.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("[WARN] Logging disabled: {:#}", e);
            None
        }
    };
    debug!("Configuration: {:?}", config);

    match run_cli_command(cli.command, &config, cli.data_dir).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            ExitCode::FAILURE
        }
    }
}
