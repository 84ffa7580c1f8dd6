//! Logging setup for the simulator binary.
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Default filter when neither `--log` nor `POWERS_LOG` is given.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a stderr `fmt` subscriber so reports on stdout stay clean.
pub fn setup_logging(filter: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_new(filter.unwrap_or(DEFAULT_FILTER))
        .map_err(|e| anyhow::anyhow!("Invalid log filter: {}", e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install subscriber: {}", e))?;

    Ok(())
}
