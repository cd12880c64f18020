use anyhow::Result;
use clap::Parser;

use mtc_portal::cli::{self, Cli};
use mtc_portal::core::{PortalConfig, logger};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = PortalConfig::from_env();
    cli.apply_to(&mut config);

    let _log_guard = logger::init_logger(&config.log_level, config.log_dir.as_deref())?;
    tracing::debug!(api_url = %config.api_url, "mtc-portal starting");

    if let Err(e) = cli::run(cli, config).await {
        tracing::error!("Command failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}
