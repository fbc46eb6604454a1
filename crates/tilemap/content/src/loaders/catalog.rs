//! Tile catalog loader.
//!
//! Every entry creates a fresh tile type unless it names an earlier entry as
//! its `alias`, in which case both entries share one tile type. The identity
//! table keeps the first of such entries and reports the rest.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tilemap_core::{TerrainKind, TileCatalogEntry, TileType};

use crate::loaders::{LoadResult, read_file};

/// One catalog entry as written in RON.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TileEntryRon {
    name: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    terrain: Option<TerrainKind>,
    #[serde(default)]
    alias: Option<String>,
}

/// Tile catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TileCatalogRon {
    tiles: Vec<TileEntryRon>,
}

/// Loader for tile catalogs from RON files.
///
/// ```ron
/// (
///     tiles: [
///         (name: "grass_01", label: Some("Grass"), terrain: Some(Floor)),
///         (name: "water_01", terrain: Some(Water)),
///         (name: "grass_old", alias: Some("grass_01")),
///     ],
/// )
/// ```
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a tile catalog from a RON file.
    ///
    /// Entries are returned in file order. A missing `label` defaults to the
    /// entry name and a missing `terrain` to [`TerrainKind::Floor`].
    pub fn load(path: &Path) -> LoadResult<Vec<TileCatalogEntry>> {
        let content = read_file(path)?;
        let catalog: TileCatalogRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tile catalog RON: {}", e))?;

        let mut defined: HashMap<String, TileType> = HashMap::new();
        let mut entries = Vec::with_capacity(catalog.tiles.len());

        for entry in catalog.tiles {
            let tile = match entry.alias {
                Some(alias) => {
                    if entry.label.is_some() || entry.terrain.is_some() {
                        anyhow::bail!(
                            "Tile '{}' aliases '{}' and cannot also set label or terrain",
                            entry.name,
                            alias
                        );
                    }
                    defined.get(&alias).cloned().ok_or_else(|| {
                        anyhow::anyhow!("Tile '{}' aliases unknown tile '{}'", entry.name, alias)
                    })?
                }
                None => TileType::with_terrain(
                    entry.label.unwrap_or_else(|| entry.name.clone()),
                    entry.terrain.unwrap_or_default(),
                ),
            };

            defined
                .entry(entry.name.clone())
                .or_insert_with(|| tile.clone());
            entries.push(TileCatalogEntry::new(entry.name, tile));
        }

        Ok(entries)
    }
}
