//! Support power catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use powers_core::SupportPowerInfo;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Catalog file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PowerCatalogFile {
    powers: Vec<SupportPowerInfo>,
}

/// Power definitions indexed by order name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PowerCatalog {
    powers: BTreeMap<String, SupportPowerInfo>,
}

impl PowerCatalog {
    /// Builds a catalog, rejecting duplicate order names.
    pub fn from_definitions(definitions: Vec<SupportPowerInfo>) -> LoadResult<Self> {
        let mut powers = BTreeMap::new();
        for info in definitions {
            if info.order_name.is_empty() {
                anyhow::bail!("Support power with empty order_name");
            }
            let name = info.order_name.clone();
            if powers.insert(name.clone(), info).is_some() {
                anyhow::bail!("Duplicate support power definition: {}", name);
            }
        }
        Ok(Self { powers })
    }

    pub fn get(&self, order_name: &str) -> Option<&SupportPowerInfo> {
        self.powers.get(order_name)
    }

    /// Iterates definitions in order-name order.
    pub fn iter(&self) -> impl Iterator<Item = &SupportPowerInfo> + '_ {
        self.powers.values()
    }

    pub fn len(&self) -> usize {
        self.powers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }
}

/// Loader for support power catalogs from RON files.
pub struct PowerLoader;

impl PowerLoader {
    /// Load a power catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing `(powers: [...])`
    pub fn load(path: &Path) -> LoadResult<PowerCatalog> {
        let content = read_file(path)?;
        let catalog = Self::parse(&content)?;
        debug!(path = %path.display(), powers = catalog.len(), "loaded power catalog");
        Ok(catalog)
    }

    /// Parse a power catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<PowerCatalog> {
        let file: PowerCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse power catalog RON: {}", e))?;
        PowerCatalog::from_definitions(file.powers)
    }
}
