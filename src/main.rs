pub mod config;
pub mod db_mongo;
pub mod error;
pub mod probe;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::ProbeConfig;
use crate::probe::run_probe;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    config::load_env_file();
    let config = ProbeConfig::from_env();
    let outcome = run_probe(&config).await;
    println!("{}", outcome.report());
    tracing::debug!("Probe finished, success: {}", outcome.is_success());

    // every outcome is reported, none is an exit failure
    Ok(())
}
