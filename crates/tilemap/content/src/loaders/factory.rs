//! Content factory for loading tile content from a data directory.

use std::path::{Path, PathBuf};

use tilemap_core::{SparseGrid, TileCatalogEntry, TileIdentityTable};

use crate::loaders::{CatalogLoader, ConfigLoader, LayoutLoader, LoadResult};
use crate::settings::SaveSettings;

/// Content factory that loads all tile content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── tiles.ron      (required)
/// ├── layouts.ron    (optional)
/// └── save.toml      (optional)
/// ```
#[derive(Clone, Debug)]
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join("tiles.ron")
    }

    pub fn layouts_path(&self) -> PathBuf {
        self.data_dir.join("layouts.ron")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("save.toml")
    }

    /// Load the tile catalog from `tiles.ron`.
    pub fn load_catalog(&self) -> LoadResult<Vec<TileCatalogEntry>> {
        CatalogLoader::load(&self.catalog_path())
    }

    /// Load grid layouts from `layouts.ron`.
    ///
    /// Returns an empty list when the file does not exist.
    pub fn load_layouts(&self, table: &TileIdentityTable) -> LoadResult<Vec<(String, SparseGrid)>> {
        let path = self.layouts_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        LayoutLoader::load(&path, table)
    }

    /// Load save settings from `save.toml`.
    ///
    /// Returns `None` when the file does not exist.
    pub fn load_settings(&self) -> LoadResult<Option<SaveSettings>> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(None);
        }
        ConfigLoader::load(&path).map(Some)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
