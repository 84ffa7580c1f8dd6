use crate::error::ConfigError;

/// Simulation constants shared by every power manager in a session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowersConfig {
    /// Fixed simulation rate used to convert charge times (seconds) into ticks.
    #[cfg_attr(feature = "serde", serde(default = "PowersConfig::default_ticks_per_second"))]
    pub ticks_per_second: u32,
}

impl PowersConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TICKS_PER_SECOND: u32 = 25;

    pub fn new() -> Self {
        Self {
            ticks_per_second: Self::DEFAULT_TICKS_PER_SECOND,
        }
    }

    pub fn with_ticks_per_second(ticks_per_second: u32) -> Self {
        Self { ticks_per_second }
    }

    /// Rejects configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    #[cfg(feature = "serde")]
    fn default_ticks_per_second() -> u32 {
        Self::DEFAULT_TICKS_PER_SECOND
    }
}

impl Default for PowersConfig {
    fn default() -> Self {
        Self::new()
    }
}
