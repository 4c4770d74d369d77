use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use traded_tokens::bootstrap::run;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        tracing::error!("Traded token scan failed: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
