use std::process::ExitCode;

use pubnubctl::config::Config;
use pubnubctl::provision;

#[tokio::main]
async fn main() -> ExitCode {
    // The API key must be present before we touch the network at all.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("✗ {error}");
            return ExitCode::FAILURE;
        }
    };

    match provision::run(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("✗ {error}");
            ExitCode::FAILURE
        }
    }
}
