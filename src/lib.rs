pub mod commands;
pub mod storage_api;

use clap::Parser;
use commands::{Cli, MISSING_FILE_MESSAGE};
use std::io::Write;
use std::process::ExitCode;
use storage_api::{ApiConfig, ApiError, StorageApiClient};

/// Parse arguments, run one operation and print its rendered result
pub async fn run() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    run_cli(cli, &mut std::io::stdout(), &mut std::io::stderr()).await
}

/// Run an already parsed command. The rendered result goes to `out`,
/// failures that leave nothing to render go to `err`.
pub async fn run_cli(cli: Cli, out: &mut impl Write, err: &mut impl Write) -> ExitCode {
    let config = ApiConfig::new(cli.base_url);

    let client = match StorageApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            let _ = writeln!(err, "{}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command.into_operation().await {
        Ok(operation) => client.execute(operation).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(normalized) => {
            let _ = writeln!(out, "{}", normalized.render());
            ExitCode::SUCCESS
        }
        Err(ApiError::MissingInput { .. }) => {
            let _ = writeln!(out, "{}", MISSING_FILE_MESSAGE);
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("operation failed: {}", e);
            let _ = writeln!(err, "{}", e);
            ExitCode::FAILURE
        }
    }
}
