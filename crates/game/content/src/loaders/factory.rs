//! Content factory for loading every data file from one directory.

use std::path::{Path, PathBuf};

use powers_core::PowersConfig;

use crate::loaders::{ConfigLoader, LoadResult, PowerCatalog, PowerLoader};

/// Content factory that loads all power content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── powers.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::BUNDLED_DATA_DIR)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load simulation configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<PowersConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the power catalog from `powers.ron`.
    pub fn load_powers(&self) -> LoadResult<PowerCatalog> {
        PowerLoader::load(&self.data_dir.join("powers.ron"))
    }
}
