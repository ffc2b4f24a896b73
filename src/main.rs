mod bbox;
mod config;
mod credentials;
mod datasets;
mod downloader;
mod pipeline;
mod probe;
mod runner;

use config::Config;
use credentials::Credentials;
use runner::CopernicusCli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("notos=info")),
        )
        .init();

    // Optional path to a JSON config file; defaults to the Gulf of Mexico
    // study setup otherwise.
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // Fail fast before any subprocess work if credentials are missing.
    let credentials = Credentials::from_env()?;

    pipeline::run(&config, &credentials, &CopernicusCli)?;

    Ok(())
}
