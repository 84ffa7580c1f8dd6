//! Simulation configuration loader.

use std::path::Path;

use powers_core::PowersConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for simulation configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<PowersConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<PowersConfig> {
        let config: PowersConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rate_falls_back_to_default() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config.ticks_per_second, PowersConfig::DEFAULT_TICKS_PER_SECOND);
    }

    #[test]
    fn explicit_rate_is_used() {
        let config = ConfigLoader::parse("ticks_per_second = 40").unwrap();
        assert_eq!(config.ticks_per_second, 40);
    }

    #[test]
    fn zero_rate_is_rejected() {
        let err = ConfigLoader::parse("ticks_per_second = 0").unwrap_err();
        assert!(err.to_string().contains("ticks_per_second"));
    }
}
