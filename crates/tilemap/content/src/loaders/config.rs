//! Save settings loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::settings::SaveSettings;

/// Loader for save settings from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load save settings from a TOML file.
    pub fn load(path: &Path) -> LoadResult<SaveSettings> {
        let content = read_file(path)?;
        let settings: SaveSettings = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse save settings TOML: {}", e))?;

        Ok(settings)
    }
}
