//! Simulator configuration from the process environment.
use std::env;
use std::path::PathBuf;

use powers_core::PowersConfig;

/// Settings shared by every subcommand. CLI flags override these.
#[derive(Clone, Debug, Default)]
pub struct SimConfig {
    pub ticks_per_second: Option<u32>,
    pub catalog: Option<PathBuf>,
    pub log: Option<String>,
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `POWERS_TICK_RATE` - Simulation ticks per second (default: from config.toml)
    /// - `POWERS_CATALOG` - Power catalog RON file (default: bundled catalog)
    /// - `POWERS_LOG` - Log filter directive (default: info)
    pub fn from_env() -> Self {
        Self {
            ticks_per_second: read_env::<u32>("POWERS_TICK_RATE").filter(|rate| *rate > 0),
            catalog: env::var("POWERS_CATALOG").ok().map(PathBuf::from),
            log: env::var("POWERS_LOG").ok(),
        }
    }

    /// Applies the tick rate override, if any, on top of loaded config.
    pub fn apply(&self, mut config: PowersConfig) -> PowersConfig {
        if let Some(rate) = self.ticks_per_second {
            config.ticks_per_second = rate;
        }
        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
