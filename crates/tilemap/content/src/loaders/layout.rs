//! Grid layout loader.
//!
//! Layouts describe the initial contents of named grids by catalog name.
//! Unlike snapshot loading, authored layouts must be fully resolvable: an
//! unknown tile name is an error, not a skipped cell.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tilemap_core::{Position, SparseGrid, TileGrid, TileIdentityTable};

use crate::loaders::{LoadResult, read_file};

/// One grid layout in RON.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GridLayoutRon {
    name: String,
    #[serde(default)]
    tiles: Vec<(i32, i32, String)>, // (x, y, tile name)
}

/// Layout file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutFileRon {
    grids: Vec<GridLayoutRon>,
}

/// Loader for grid layouts from RON files.
pub struct LayoutLoader;

impl LayoutLoader {
    /// Load grid layouts from a RON file, resolving tile names through `table`.
    ///
    /// # Returns
    ///
    /// Returns `(grid name, grid)` pairs in file order.
    pub fn load(path: &Path, table: &TileIdentityTable) -> LoadResult<Vec<(String, SparseGrid)>> {
        let content = read_file(path)?;
        let data: LayoutFileRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse layout RON: {}", e))?;

        let mut grids = Vec::with_capacity(data.grids.len());
        for layout in data.grids {
            let mut grid = SparseGrid::new();
            for (x, y, name) in layout.tiles {
                let tile = table.resolve(&name).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Layout '{}' places unknown tile '{}' at ({}, {})",
                        layout.name,
                        name,
                        x,
                        y
                    )
                })?;
                grid.set_tile(Position::new(x, y), tile.clone());
            }
            grids.push((layout.name, grid));
        }

        Ok(grids)
    }
}
